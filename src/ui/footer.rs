use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line as RatatuiLine, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::StatusMessage;
use crate::dispatch::footer_bindings;

pub fn render_footer(f: &mut Frame<'_>, area: Rect) {
    f.render_widget(Paragraph::new(footer_line()), area);
}

/// Static keybinding help, e.g. `Ctrl+n: new file • Ctrl+l: list • ...`.
#[must_use]
pub fn footer_line() -> RatatuiLine<'static> {
    let style = Style::default().fg(theme::FOOTER_FG);
    let text = footer_bindings()
        .map(|b| format!("{}: {}", b.key, b.description))
        .collect::<Vec<_>>()
        .join(theme::FOOTER_SEPARATOR);
    RatatuiLine::from(Span::styled(text, style))
}

pub fn render_status(f: &mut Frame<'_>, status: &StatusMessage, area: Rect) {
    let color = if status.is_error {
        theme::STATUS_ERROR
    } else {
        theme::STATUS_TEXT
    };
    let line = RatatuiLine::from(Span::styled(
        status.text.clone(),
        Style::default().fg(color),
    ));
    f.render_widget(Paragraph::new(line), area);
}
