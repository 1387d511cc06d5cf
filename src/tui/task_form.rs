//! Task form handling for the terminal user interface.
//!
//! The same two-field form backs the input bar (draft of a new task) and the
//! edit dialog. Focus moves across the text fields and then the form's
//! buttons, in the order given by the `*_ORDER` constants.

use crate::{session::EditField, task::Task, tui::input::InputField};

/// Focus order constants shared by both form kinds.
pub const NAME_ORDER: usize = 0;
pub const DESCRIPTION_ORDER: usize = 1;
/// `[ Add ]` in the input bar, `[ Save ]` in the edit dialog.
pub const SUBMIT_ORDER: usize = 2;
/// `[ Close ]`; only the edit dialog has it.
pub const CLOSE_ORDER: usize = 3;

/// Which surface a form belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Draft,
    Edit,
}

/// What activating the focused element of a form asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Close,
}

#[derive(Clone, Debug)]
pub struct TaskForm {
    pub kind: FormKind,
    pub name: InputField,
    pub description: InputField,
    pub current_field: usize,
}

impl TaskForm {
    /// An empty draft form for the input bar.
    pub fn new_draft() -> Self {
        Self {
            kind: FormKind::Draft,
            name: InputField::new(),
            description: InputField::new(),
            current_field: NAME_ORDER,
        }
    }

    /// An edit form populated from a task snapshot.
    pub fn from_task(task: &Task) -> Self {
        let mut form = Self {
            kind: FormKind::Edit,
            name: InputField::with_value(&task.name),
            description: InputField::with_value(&task.description),
            current_field: NAME_ORDER,
        };
        form.update_active_field();
        form
    }

    /// Number of focusable elements (text fields + buttons).
    pub fn field_count(&self) -> usize {
        match self.kind {
            FormKind::Draft => 3,
            FormKind::Edit => 4,
        }
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.field_count();
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            self.field_count() - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    /// Mark the focused text field as active, if focus is on one.
    pub fn update_active_field(&mut self) {
        self.name.active = self.current_field == NAME_ORDER;
        self.description.active = self.current_field == DESCRIPTION_ORDER;
    }

    /// Drop focus from every field.
    pub fn deactivate(&mut self) {
        self.name.active = false;
        self.description.active = false;
    }

    /// The focused text field, if focus is not on a button.
    pub fn current_input(&self) -> Option<&InputField> {
        match self.current_field {
            NAME_ORDER => Some(&self.name),
            DESCRIPTION_ORDER => Some(&self.description),
            _ => None,
        }
    }

    fn current_input_mut(&mut self) -> Option<&mut InputField> {
        match self.current_field {
            NAME_ORDER => Some(&mut self.name),
            DESCRIPTION_ORDER => Some(&mut self.description),
            _ => None,
        }
    }

    /// Insert a character into the focused text field.
    ///
    /// Returns the resulting field change, or `None` when a button is focused.
    pub fn handle_char(&mut self, c: char) -> Option<EditField> {
        self.current_input_mut()?.handle_char(c);
        self.current_edit()
    }

    pub fn handle_backspace(&mut self) -> Option<EditField> {
        self.current_input_mut()?.handle_backspace();
        self.current_edit()
    }

    pub fn handle_delete(&mut self) -> Option<EditField> {
        self.current_input_mut()?.handle_delete();
        self.current_edit()
    }

    /// Move the cursor of the focused text field.
    pub fn handle_left_right(&mut self, right: bool) {
        if let Some(field) = self.current_input_mut() {
            if right {
                field.move_cursor_right()
            } else {
                field.move_cursor_left()
            }
        }
    }

    pub fn handle_home_end(&mut self, end: bool) {
        if let Some(field) = self.current_input_mut() {
            if end {
                field.move_end()
            } else {
                field.move_home()
            }
        }
    }

    /// The focused text field's value as a snapshot change.
    pub fn current_edit(&self) -> Option<EditField> {
        match self.current_field {
            NAME_ORDER => Some(EditField::Name(self.name.value.clone())),
            DESCRIPTION_ORDER => Some(EditField::Description(self.description.value.clone())),
            _ => None,
        }
    }

    /// What Enter means with the current focus.
    pub fn activate(&self) -> FormAction {
        if self.current_field == CLOSE_ORDER {
            FormAction::Close
        } else {
            FormAction::Submit
        }
    }

    /// Whether both text fields hold some text.
    pub fn is_complete(&self) -> bool {
        !self.name.value.is_empty() && !self.description.value.is_empty()
    }

    /// Reset both fields and move focus back to the name field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
        self.current_field = NAME_ORDER;
        self.update_active_field();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Status;

    fn sample_task() -> Task {
        Task {
            id: 7,
            name: "Buy milk".to_string(),
            description: "2%".to_string(),
            status: Status::NotCompleted,
            created_at_utc: 0,
        }
    }

    #[test]
    fn test_focus_cycles_through_buttons() {
        let mut draft = TaskForm::new_draft();
        draft.next_field();
        draft.next_field();
        assert_eq!(draft.current_field, SUBMIT_ORDER);
        assert!(draft.current_input().is_none());
        draft.next_field();
        assert_eq!(draft.current_field, NAME_ORDER);

        let mut edit = TaskForm::from_task(&sample_task());
        edit.prev_field();
        assert_eq!(edit.current_field, CLOSE_ORDER);
        assert_eq!(edit.activate(), FormAction::Close);
    }

    #[test]
    fn test_typing_reports_field_change() {
        let mut form = TaskForm::from_task(&sample_task());
        assert_eq!(form.handle_char('!'), Some(EditField::Name("Buy milk!".to_string())));

        form.next_field();
        assert_eq!(form.handle_backspace(), Some(EditField::Description("2".to_string())));

        form.next_field();
        assert_eq!(form.handle_char('x'), None);
        assert_eq!(form.activate(), FormAction::Submit);
    }

    #[test]
    fn test_is_complete_and_clear() {
        let mut form = TaskForm::new_draft();
        assert!(!form.is_complete());
        form.handle_char('a');
        assert!(!form.is_complete());
        form.next_field();
        form.handle_char(' ');
        assert!(form.is_complete());
        form.handle_backspace();
        assert!(!form.is_complete());

        form.clear();
        assert!(form.name.value.is_empty());
        assert!(form.description.value.is_empty());
        assert_eq!(form.current_field, NAME_ORDER);
    }
}
