//! Enumerations used to classify and select tasks.
//!
//! `Status` is the closed set of states a task can be in, and `Filter` is the
//! status predicate the list view is projected through.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use crate::task::Task;

/// Task completion status.
#[derive(Debug, Clone, Copy, Default, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[serde(alias = "Completed")]
    Completed,
    #[default]
    #[serde(alias = "Not Completed")]
    NotCompleted,
}

impl Status {
    /// Every status, in the order selectors present them.
    pub const ALL: [Status; 2] = [Status::Completed, Status::NotCompleted];

    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            Status::Completed => Status::NotCompleted,
            Status::NotCompleted => Status::Completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::NotCompleted => "Not Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status predicate governing which tasks the list view displays.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Completed,
    NotCompleted,
}

impl Filter {
    /// Every filter, in the order the filter menu presents them.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::NotCompleted];

    /// Whether `task` passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.status == Status::Completed,
            Filter::NotCompleted => task.status == Status::NotCompleted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::NotCompleted => "Not Completed",
        }
    }

    /// Position of this filter within `Filter::ALL`.
    pub fn index(self) -> usize {
        Filter::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with(status: Status) -> Task {
        Task {
            id: 1,
            name: "n".to_string(),
            description: "d".to_string(),
            status,
            created_at_utc: 0,
        }
    }

    #[test]
    fn test_status_default_and_toggle() {
        assert_eq!(Status::default(), Status::NotCompleted);
        assert_eq!(Status::NotCompleted.toggled(), Status::Completed);
        assert_eq!(Status::Completed.toggled(), Status::NotCompleted);
    }

    #[test]
    fn test_filter_matches() {
        let done = task_with(Status::Completed);
        let open = task_with(Status::NotCompleted);

        assert!(Filter::All.matches(&done));
        assert!(Filter::All.matches(&open));
        assert!(Filter::Completed.matches(&done));
        assert!(!Filter::Completed.matches(&open));
        assert!(Filter::NotCompleted.matches(&open));
        assert!(!Filter::NotCompleted.matches(&done));
    }

    #[test]
    fn test_status_seed_forms() {
        for (json, expected) in [
            ("\"completed\"", Status::Completed),
            ("\"Completed\"", Status::Completed),
            ("\"not-completed\"", Status::NotCompleted),
            ("\"Not Completed\"", Status::NotCompleted),
        ] {
            assert_eq!(serde_json::from_str::<Status>(json).unwrap(), expected);
        }
        assert!(serde_json::from_str::<Status>("\"Done\"").is_err());
    }
}
