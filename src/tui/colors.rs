//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Status badge for completed tasks
pub const SUCCESS_GREEN: Color = Color::Rgb(25, 135, 84);
/// Status badge for tasks still open
pub const WARNING_AMBER: Color = Color::Rgb(255, 193, 7);
/// Card border, headers and primary buttons
pub const PRIMARY_BLUE: Color = Color::Rgb(13, 110, 253);
/// Delete hint
pub const DANGER_RED: Color = Color::Rgb(220, 53, 69);
