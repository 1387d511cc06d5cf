//! Enumerations for TUI state management.

/// Which screen or overlay currently receives key events.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    TaskList,
    AddTask,
    FilterMenu,
    StatusMenu,
    EditTask,
    Help,
}

/// Input mode for text entry fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputMode {
    None,
    Text,
}

/// Highlighted row of a drop-down menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MenuCursor {
    pub selected: usize,
    pub len: usize,
}

impl MenuCursor {
    pub fn new(selected: usize, len: usize) -> Self {
        MenuCursor {
            selected: selected.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }
}
