//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns all session state (the task
//! store, the filter selection, the edit session and the draft form), handles
//! user input, and renders the input bar, task cards and overlays.

use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use crate::{
    fields::{Filter, Status},
    session::EditSession,
    store::TaskStore,
    task::Task,
    tui::{
        colors::{DANGER_RED, PRIMARY_BLUE, SUCCESS_GREEN, WARNING_AMBER},
        enums::{AppState, InputMode, MenuCursor},
        input::InputField,
        task_form::{FormAction, TaskForm, CLOSE_ORDER, SUBMIT_ORDER},
        utils::{centered_fixed, centered_rect},
    },
};

const REQUIRED_FIELDS_MESSAGE: &str = "Name and description are required";

/// Main application state for the terminal user interface.
///
/// Starts with an empty (or seeded) store, a closed edit session and the
/// configured filter; nothing outlives the session.
pub struct App {
    state: AppState,
    store: TaskStore,
    filter: Filter,
    edit: EditSession,
    draft: TaskForm,
    edit_form: Option<TaskForm>,
    menu: MenuCursor,
    input_mode: InputMode,
    list_state: ListState,
    visible: Vec<u64>,
    seen: Option<(Rc<[Task]>, Filter)>,
    status_message: String,
}

impl App {
    /// Create a new App over `store`, showing tasks through `filter`.
    pub fn new(store: TaskStore, filter: Filter) -> Self {
        let mut app = App {
            state: AppState::TaskList,
            store,
            filter,
            edit: EditSession::default(),
            draft: TaskForm::new_draft(),
            edit_form: None,
            menu: MenuCursor::default(),
            input_mode: InputMode::None,
            list_state: ListState::default(),
            visible: Vec::new(),
            seen: None,
            status_message: String::new(),
        };
        app.sync_view();
        app
    }

    /// Rebuild the visible task ids if the collection or the filter changed.
    ///
    /// Keeps the selected task selected when it is still visible; otherwise
    /// keeps the selected row index, clamped to the new list.
    fn sync_view(&mut self) {
        let snapshot = self.store.snapshot();
        let unchanged = self
            .seen
            .as_ref()
            .is_some_and(|(seen, filter)| Rc::ptr_eq(seen, &snapshot) && *filter == self.filter);
        if unchanged {
            return;
        }

        let old_idx = self.list_state.selected();
        let old_id = old_idx.and_then(|idx| self.visible.get(idx)).copied();

        self.visible = self.store.filter(self.filter).map(|t| t.id).collect();

        let new_idx = if self.visible.is_empty() {
            None
        } else {
            old_id
                .and_then(|id| self.visible.iter().position(|&v| v == id))
                .or_else(|| old_idx.map(|idx| idx.min(self.visible.len() - 1)))
                .or(Some(0))
        };
        self.list_state.select(new_idx);
        self.seen = Some((snapshot, self.filter));
        debug!(
            revision = self.store.revision(),
            visible = self.visible.len(),
            "task view rebuilt"
        );
    }

    fn selected_id(&self) -> Option<u64> {
        self.list_state
            .selected()
            .and_then(|idx| self.visible.get(idx))
            .copied()
    }

    fn select_id(&mut self, id: u64) {
        if let Some(pos) = self.visible.iter().position(|&v| v == id) {
            self.list_state.select(Some(pos));
        }
    }

    fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    fn to_task_list(&mut self) {
        self.state = AppState::TaskList;
        self.input_mode = InputMode::None;
        self.draft.deactivate();
    }

    /// Create a task from the input bar. Clears the draft on success.
    fn submit_draft(&mut self) {
        match self.store.add(&self.draft.name.value, &self.draft.description.value) {
            Some(id) => {
                self.draft.clear();
                self.sync_view();
                self.select_id(id);
                self.set_status_message("Task added");
            }
            None => self.set_status_message(REQUIRED_FIELDS_MESSAGE),
        }
    }

    fn set_filter(&mut self, filter: Filter) {
        debug!(filter = %filter, "filter selected");
        self.filter = filter;
        self.sync_view();
        self.set_status_message(format!(
            "Showing {} tasks ({} of {})",
            filter.label(),
            self.visible.len(),
            self.store.len()
        ));
    }

    fn set_selected_status(&mut self, status: Status) {
        if let Some(id) = self.selected_id() {
            if self.store.set_status(id, status) {
                self.sync_view();
                self.set_status_message(format!("Task status updated to {}", status));
            }
        }
    }

    fn toggle_selected_status(&mut self) {
        let current = self
            .selected_id()
            .and_then(|id| self.store.get(id))
            .map(|t| t.status);
        if let Some(status) = current {
            self.set_selected_status(status.toggled());
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.store.remove(id) {
                self.sync_view();
                self.set_status_message("Task deleted");
            }
        }
    }

    /// Open the edit dialog on a copy of the selected task.
    fn open_edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            self.set_status_message("No task selected");
            return;
        };
        let Some(task) = self.store.get(id) else {
            return;
        };
        if self.edit.open(task) {
            self.edit_form = Some(TaskForm::from_task(task));
            self.state = AppState::EditTask;
            self.input_mode = InputMode::Text;
        }
    }

    /// Commit the dialog. Empty fields keep the dialog open.
    fn save_edit(&mut self) {
        let complete = self.edit_form.as_ref().is_some_and(TaskForm::is_complete);
        if !complete {
            self.set_status_message(REQUIRED_FIELDS_MESSAGE);
            return;
        }
        if self.edit.save(&mut self.store) {
            self.set_status_message("Task updated");
        } else {
            self.set_status_message("Task no longer exists");
        }
        self.close_edit_dialog();
        self.sync_view();
    }

    fn cancel_edit(&mut self) {
        self.edit.cancel();
        self.close_edit_dialog();
    }

    fn close_edit_dialog(&mut self) {
        self.edit_form = None;
        self.to_task_list();
    }

    /// Handle keyboard input when in the task list view.
    ///
    /// Returns true if the application should quit.
    fn handle_task_list_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.list_state.selected() {
                    if selected > 0 {
                        self.list_state.select(Some(selected - 1));
                    }
                } else if !self.visible.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.list_state.selected() {
                    if selected + 1 < self.visible.len() {
                        self.list_state.select(Some(selected + 1));
                    }
                } else if !self.visible.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
                self.state = AppState::AddTask;
                self.input_mode = InputMode::Text;
                self.draft.update_active_field();
            }
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('c') | KeyCode::Char(' ') => self.toggle_selected_status(),
            KeyCode::Char('s') => {
                let current = self
                    .selected_id()
                    .and_then(|id| self.store.get(id))
                    .map(|t| t.status);
                if let Some(status) = current {
                    let idx = Status::ALL.iter().position(|&s| s == status).unwrap_or(0);
                    self.menu = MenuCursor::new(idx, Status::ALL.len());
                    self.state = AppState::StatusMenu;
                }
            }
            KeyCode::Char('f') => {
                self.menu = MenuCursor::new(self.filter.index(), Filter::ALL.len());
                self.state = AppState::FilterMenu;
            }
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Completed),
            KeyCode::Char('3') => self.set_filter(Filter::NotCompleted),
            KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::F(1) => {
                self.state = AppState::Help;
            }
            _ => {}
        }
        false
    }

    /// Handle keyboard input in the input bar.
    fn handle_add_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.to_task_list(),
            KeyCode::Tab | KeyCode::Down => self.draft.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.draft.prev_field(),
            KeyCode::Left => self.draft.handle_left_right(false),
            KeyCode::Right => self.draft.handle_left_right(true),
            KeyCode::Home => self.draft.handle_home_end(false),
            KeyCode::End => self.draft.handle_home_end(true),
            KeyCode::Backspace => {
                self.draft.handle_backspace();
            }
            KeyCode::Delete => {
                self.draft.handle_delete();
            }
            KeyCode::Enter => self.submit_draft(),
            KeyCode::Char(c) => {
                self.draft.handle_char(c);
            }
            _ => {}
        }
    }

    /// Handle keyboard input in the edit dialog.
    ///
    /// Every text change is mirrored into the edit session's snapshot.
    fn handle_edit_input(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Esc {
            self.cancel_edit();
            return;
        }
        if key == KeyCode::Char('s') && modifiers.contains(KeyModifiers::CONTROL) {
            self.save_edit();
            return;
        }
        let Some(form) = self.edit_form.as_mut() else {
            return;
        };
        let change = match key {
            KeyCode::Tab | KeyCode::Down => {
                form.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.prev_field();
                None
            }
            KeyCode::Left => {
                form.handle_left_right(false);
                None
            }
            KeyCode::Right => {
                form.handle_left_right(true);
                None
            }
            KeyCode::Home => {
                form.handle_home_end(false);
                None
            }
            KeyCode::End => {
                form.handle_home_end(true);
                None
            }
            KeyCode::Backspace => form.handle_backspace(),
            KeyCode::Delete => form.handle_delete(),
            KeyCode::Char(c) => form.handle_char(c),
            KeyCode::Enter => {
                let action = form.activate();
                match action {
                    FormAction::Submit => self.save_edit(),
                    FormAction::Close => self.cancel_edit(),
                }
                return;
            }
            _ => None,
        };
        if let Some(change) = change {
            self.edit.edit(change);
        }
    }

    /// Handle keyboard input in the filter and status drop-downs.
    fn handle_menu_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.state = AppState::TaskList,
            KeyCode::Up | KeyCode::Char('k') => self.menu.up(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.down(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let choice = self.menu.selected;
                let state = self.state;
                self.state = AppState::TaskList;
                match state {
                    AppState::FilterMenu => {
                        if let Some(&filter) = Filter::ALL.get(choice) {
                            self.set_filter(filter);
                        }
                    }
                    AppState::StatusMenu => {
                        if let Some(&status) = Status::ALL.get(choice) {
                            self.set_selected_status(status);
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn handle_help_input(&mut self, key: KeyCode) {
        if matches!(
            key,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') | KeyCode::Char('?')
        ) {
            self.state = AppState::TaskList;
        }
    }

    /// Dispatch one key press to the handler for the current state.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        match self.state {
            AppState::TaskList => return self.handle_task_list_input(key),
            AppState::AddTask => self.handle_add_input(key),
            AppState::EditTask => self.handle_edit_input(key, modifiers),
            AppState::FilterMenu | AppState::StatusMenu => self.handle_menu_input(key),
            AppState::Help => self.handle_help_input(key),
        }
        false
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(false);
                }
                self.clear_status_message();
                return Ok(self.handle_key(key.code, key.modifiers));
            }
        }
        Ok(false)
    }

    /// Render the title banner.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(Span::styled(
            "My todo",
            Style::default().fg(PRIMARY_BLUE).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render one text input with a placeholder when empty.
    fn render_input(
        f: &mut Frame,
        area: Rect,
        field: &InputField,
        title: &str,
        placeholder: &str,
        show_cursor: bool,
    ) {
        let border = if field.active {
            Style::default().fg(PRIMARY_BLUE)
        } else {
            Style::default()
        };
        let inner_width = usize::from(area.width.saturating_sub(2));
        let (offset, column) = field.visible_window(inner_width);
        let text = if field.value.is_empty() && !field.active {
            Line::from(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(field.visible_text(offset))
        };
        let widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title.to_string()),
        );
        f.render_widget(widget, area);

        if field.active && show_cursor {
            let column = u16::try_from(column).unwrap_or(u16::MAX);
            f.set_cursor_position((area.x.saturating_add(1).saturating_add(column), area.y + 1));
        }
    }

    fn button<'a>(label: &'a str, focused: bool, color: Color) -> Span<'a> {
        let style = if focused {
            Style::default().bg(color).fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Span::styled(label, style)
    }

    /// Render the name/description inputs and the add button.
    fn render_input_bar(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Min(10),
                Constraint::Length(12),
            ])
            .split(area);

        let typing = self.state == AppState::AddTask && self.input_mode == InputMode::Text;
        Self::render_input(f, chunks[0], &self.draft.name, "Name", "Todo Name", typing);
        Self::render_input(
            f,
            chunks[1],
            &self.draft.description,
            "Description",
            "Todo Description",
            typing,
        );

        let focused = self.state == AppState::AddTask && self.draft.current_field == SUBMIT_ORDER;
        let add = Paragraph::new(Line::from(Self::button("[ Add ]", focused, PRIMARY_BLUE)))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(add, chunks[2]);
    }

    /// Render the "My Todos" heading and the current filter.
    fn render_filter_row(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(34)])
            .split(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            format!(" My Todos ({}/{})", self.visible.len(), self.store.len()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        f.render_widget(heading, chunks[0]);

        let label = format!("[ {} ▾ ]", self.filter.label());
        let filter = Paragraph::new(Line::from(vec![
            Span::raw("Status Filter: "),
            Self::button(&label, self.state == AppState::FilterMenu, PRIMARY_BLUE),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(filter, chunks[1]);
    }

    fn status_badge(status: Status) -> Span<'static> {
        let bg = match status {
            Status::Completed => SUCCESS_GREEN,
            Status::NotCompleted => WARNING_AMBER,
        };
        Span::styled(
            format!(" {} ▾ ", status.label()),
            Style::default().bg(bg).fg(Color::Black),
        )
    }

    /// Render the filtered tasks as cards.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Tasks - Press 'h' for help ");

        if self.visible.is_empty() {
            let empty = Paragraph::new("No tasks available")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let store = &self.store;
        let items: Vec<ListItem> = self
            .visible
            .iter()
            .filter_map(|&id| store.get(id))
            .map(|task| {
                let label = Style::default().add_modifier(Modifier::BOLD);
                ListItem::new(vec![
                    Line::from(vec![Span::styled("Name : ", label), Span::raw(task.name.as_str())]),
                    Line::from(vec![
                        Span::styled("Description : ", label),
                        Span::raw(task.description.as_str()),
                    ]),
                    Line::from(vec![
                        Span::styled("Status : ", label),
                        Self::status_badge(task.status),
                        Span::styled(
                            format!("  added {}", task.created_local()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled("   [e] Edit", Style::default().fg(PRIMARY_BLUE)),
                        Span::styled("  [d] Delete", Style::default().fg(DANGER_RED)),
                    ]),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 48)))
            .highlight_symbol("▌ ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Render a drop-down menu of `labels` over the list.
    fn render_menu(&self, f: &mut Frame, area: Rect, title: &str, labels: &[&str]) {
        let popup = centered_fixed(28, labels.len() as u16 + 2, area);
        f.render_widget(Clear, popup);

        let items: Vec<ListItem> = labels.iter().map(|l| ListItem::new(*l)).collect();
        let mut state = ListState::default();
        state.select(Some(self.menu.selected));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(PRIMARY_BLUE))
                    .title(title.to_string()),
            )
            .highlight_style(Style::default().bg(PRIMARY_BLUE).fg(Color::White))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, popup, &mut state);
    }

    /// Render the edit dialog. Drawn only while the edit session is open.
    fn render_edit_dialog(&self, f: &mut Frame, area: Rect) {
        let (Some(form), Some(snapshot)) = (self.edit_form.as_ref(), self.edit.snapshot()) else {
            return;
        };

        let dialog = centered_fixed(64, 11, area);
        f.render_widget(Clear, dialog);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PRIMARY_BLUE))
            .title(format!(" Edit Todo #{} ", snapshot.id))
            .title_alignment(Alignment::Left);
        let inner = block.inner(dialog);
        f.render_widget(block, dialog);

        let close_x = Paragraph::new(Span::styled("× Esc", Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right);
        let close_area = Rect {
            x: dialog.x + 2,
            y: dialog.y,
            width: dialog.width.saturating_sub(4),
            height: 1,
        };
        f.render_widget(close_x, close_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let typing = self.input_mode == InputMode::Text;
        Self::render_input(f, rows[0], &form.name, "Task Name", "", typing);
        Self::render_input(f, rows[1], &form.description, "Task Description", "", typing);

        let buttons = Paragraph::new(Line::from(vec![
            Self::button("[ Save changes ]", form.current_field == SUBMIT_ORDER, PRIMARY_BLUE),
            Span::raw("  "),
            Self::button("[ Close ]", form.current_field == CLOSE_ORDER, Color::Gray),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(buttons, rows[2]);
    }

    /// Render the help screen with keyboard shortcuts.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(Span::styled("Todo Help", bold)),
            Line::from(""),
            Line::from(Span::styled("Task List:", bold)),
            Line::from("  ↑/↓, k/j       Select task"),
            Line::from("  a / i / Tab    Focus the input bar"),
            Line::from("  e / Enter      Edit selected task"),
            Line::from("  d / Delete     Delete selected task"),
            Line::from("  s              Choose status of selected task"),
            Line::from("  c / Space      Toggle status of selected task"),
            Line::from("  f              Choose status filter"),
            Line::from("  1 / 2 / 3      Filter: All / Completed / Not Completed"),
            Line::from("  h / ?          Show this help"),
            Line::from("  q / Esc / Ctrl+C  Quit"),
            Line::from(""),
            Line::from(Span::styled("Input Bar:", bold)),
            Line::from("  Tab / Shift+Tab  Move between fields"),
            Line::from("  Enter            Add task"),
            Line::from("  Esc              Back to task list"),
            Line::from(""),
            Line::from(Span::styled("Edit Dialog:", bold)),
            Line::from("  Tab              Move between fields and buttons"),
            Line::from("  Enter / Ctrl+S   Save changes"),
            Line::from("  Esc              Close without saving"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press Esc to return"),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::TaskList => format!(
                    "Tasks: {} | a add  e edit  d delete  f filter | Press 'h' for help",
                    self.visible.len()
                ),
                AppState::AddTask => "New task: Tab next field  Enter add  Esc back".to_string(),
                AppState::EditTask => "Edit task: Enter save  Esc close".to_string(),
                AppState::FilterMenu => "Status filter: Enter choose  Esc dismiss".to_string(),
                AppState::StatusMenu => "Task status: Enter choose  Esc dismiss".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(PRIMARY_BLUE).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the appropriate view renderers.
    pub fn render(&mut self, f: &mut Frame) {
        self.sync_view();

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        if self.state == AppState::Help {
            self.render_help(f, outer[0]);
            self.render_status_bar(f, outer[1]);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(outer[0]);

        self.render_header(f, chunks[0]);
        self.render_input_bar(f, chunks[1]);
        self.render_filter_row(f, chunks[2]);
        self.render_task_list(f, chunks[3]);

        match self.state {
            AppState::FilterMenu => {
                let labels: Vec<&str> = Filter::ALL.iter().map(|filter| filter.label()).collect();
                self.render_menu(f, chunks[3], "Status Filter", &labels);
            }
            AppState::StatusMenu => {
                let labels: Vec<&str> = Status::ALL.iter().map(|s| s.label()).collect();
                self.render_menu(f, chunks[3], "Set Status", &labels);
            }
            AppState::EditTask => self.render_edit_dialog(f, centered_rect(90, 90, outer[0])),
            _ => {}
        }

        self.render_status_bar(f, outer[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
