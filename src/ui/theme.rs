use ratatui::style::{Color, Modifier, Style};

// Banner
pub const HEADER_FG: Color = Color::Indexed(16);
pub const HEADER_BG: Color = Color::Indexed(205);

// Accent used for the prompt text and cursors
pub const ACCENT: Color = Color::Indexed(205);

// Footer keybinding help
pub const FOOTER_FG: Color = Color::Indexed(69);

// List
pub const LIST_TITLE_FG: Color = Color::Indexed(16);
pub const LIST_TITLE_BG: Color = Color::Indexed(254);
pub const LIST_SELECTED: Color = Color::Indexed(205);
pub const LIST_DESCRIPTION: Color = Color::Gray;
pub const FILTER_PROMPT: Color = Color::Magenta;

// Editor border
pub const BORDER_EDIT: Color = Color::Green;

// Text colors
pub const TEXT_MUTED: Color = Color::DarkGray;

// Status line
pub const STATUS_TEXT: Color = Color::Gray;
pub const STATUS_ERROR: Color = Color::Red;

pub const GLYPH_SELECTED: &str = "│ ";
pub const GLYPH_UNSELECTED: &str = "  ";
pub const FOOTER_SEPARATOR: &str = " • ";

#[must_use]
pub fn cursor_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
}

#[must_use]
pub fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn list_title_style() -> Style {
    Style::default().fg(LIST_TITLE_FG).bg(LIST_TITLE_BG)
}
