//! The single outstanding edit interaction.
//!
//! An `EditSession` is either closed, or open on a value copy of one task.
//! Edits touch only that copy; the stored task changes on `save` and never on
//! `cancel`.

use tracing::debug;

use crate::store::TaskStore;
use crate::task::Task;

/// A change to one editable field of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditField {
    Name(String),
    Description(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open(Task),
}

impl EditSession {
    /// Start editing a copy of `task`.
    ///
    /// Refused while another session is open: the dialog must be closed first.
    pub fn open(&mut self, task: &Task) -> bool {
        if self.is_open() {
            debug!(task_id = task.id, "edit session already open");
            return false;
        }
        *self = EditSession::Open(task.clone());
        true
    }

    /// Apply a field change to the snapshot. Ignored while closed.
    pub fn edit(&mut self, field: EditField) {
        if let EditSession::Open(snapshot) = self {
            match field {
                EditField::Name(value) => snapshot.name = value,
                EditField::Description(value) => snapshot.description = value,
            }
        }
    }

    /// Commit the snapshot's name and description and close the session.
    ///
    /// Returns true when the task still existed and both fields were
    /// non-empty, even if nothing differed from the stored task. A task
    /// deleted while the dialog was open makes this a no-op returning false.
    pub fn save(&mut self, store: &mut TaskStore) -> bool {
        match std::mem::take(self) {
            EditSession::Open(snapshot) => {
                store.update(snapshot.id, &snapshot.name, &snapshot.description)
            }
            EditSession::Closed => false,
        }
    }

    /// Discard the snapshot and close the session.
    pub fn cancel(&mut self) {
        *self = EditSession::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open(_))
    }

    pub fn snapshot(&self) -> Option<&Task> {
        match self {
            EditSession::Open(task) => Some(task),
            EditSession::Closed => None,
        }
    }
}
