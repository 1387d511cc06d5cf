//! Task data structure.
//!
//! A `Task` is the only entity the application tracks: a named, described unit of
//! work with a completion status.

use chrono::{Local, TimeZone};
use serde::Deserialize;

use crate::fields::Status;

/// A single unit of user-tracked work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub status: Status,
    pub created_at_utc: i64,
}

impl Task {
    /// Creation time rendered in the local timezone, e.g. `14:05`.
    pub fn created_local(&self) -> String {
        match Local.timestamp_opt(self.created_at_utc, 0).single() {
            Some(dt) => dt.format("%H:%M").to_string(),
            None => "-".to_string(),
        }
    }
}

/// One entry of a seed file, before it has been given an id.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedTask {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: Status,
}
