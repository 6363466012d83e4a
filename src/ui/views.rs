use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::app::{EditSession, FilterState, NoteList, PROMPT_PLACEHOLDER};
use crate::cursor::CursorBuffer;
use crate::dispatch::Command;

pub const HEADER_TEXT: &str = "Welcome to jotter 📓";
pub const LIST_TITLE: &str = "All notes 📋";

const PROMPT_PREFIX: &str = "> ";
const PROMPT_WIDTH: u16 = 50;

pub fn render_header(f: &mut Frame<'_>, area: Rect) {
    #[allow(clippy::cast_possible_truncation)]
    let width = (HEADER_TEXT.width() as u16 + 4).min(area.width);
    let banner_area = Rect { width, ..area };

    let banner = Paragraph::new(HEADER_TEXT)
        .style(theme::header_style())
        .block(Block::default().padding(Padding::new(2, 2, 1, 1)));
    f.render_widget(banner, banner_area);
}

pub fn render_prompt(f: &mut Frame<'_>, prompt: &CursorBuffer, area: Rect) {
    let accent = Style::default().fg(theme::ACCENT);
    let text = if prompt.is_empty() {
        Span::styled(PROMPT_PLACEHOLDER, Style::default().fg(theme::TEXT_MUTED))
    } else {
        Span::styled(prompt.content().to_string(), accent)
    };
    let line = RatatuiLine::from(vec![Span::styled(PROMPT_PREFIX, accent), text]);

    let prompt_area = Rect {
        width: PROMPT_WIDTH.min(area.width),
        height: 1_u16.min(area.height),
        ..area
    };
    f.render_widget(Paragraph::new(line), prompt_area);

    #[allow(clippy::cast_possible_truncation)]
    let cursor_x = prompt_area.x + (PROMPT_PREFIX.len() + prompt.cursor_display_pos()) as u16;
    if cursor_x < prompt_area.right() {
        f.set_cursor_position((cursor_x, prompt_area.y));
    }
}

pub fn render_editor(f: &mut Frame<'_>, session: &EditSession, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", session.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_EDIT));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(session.editor(), inner);
}

pub fn render_list(f: &mut Frame<'_>, notes: &NoteList, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = RatatuiLine::from(Span::styled(
        format!(" {LIST_TITLE} "),
        theme::list_title_style(),
    ));
    f.render_widget(Paragraph::new(title), chunks[0]);
    f.render_widget(Paragraph::new(filter_line(notes)), chunks[1]);

    let visible = notes.visible();
    if visible.is_empty() {
        let empty = if notes.items().is_empty() {
            "No notes yet."
        } else {
            "No matching notes."
        };
        f.render_widget(
            Paragraph::new(Span::styled(empty, Style::default().fg(theme::TEXT_MUTED))),
            chunks[2],
        );
    } else {
        let selected = notes.selected_index();
        let items: Vec<ListItem<'_>> = visible
            .iter()
            .enumerate()
            .map(|(i, note)| list_item(&note.title, &note.description, i == selected))
            .collect();
        let mut state = ListState::default().with_selected(Some(selected));
        f.render_stateful_widget(List::new(items), chunks[2], &mut state);
    }

    f.render_widget(Paragraph::new(list_help_line()), chunks[3]);
}

fn filter_line(notes: &NoteList) -> RatatuiLine<'static> {
    let prompt = Span::styled("Filter: ", Style::default().fg(theme::FILTER_PROMPT));
    match notes.filter() {
        FilterState::Off => {
            let count = notes.items().len();
            let noun = if count == 1 { "note" } else { "notes" };
            RatatuiLine::from(Span::styled(
                format!("{count} {noun}"),
                Style::default().fg(theme::TEXT_MUTED),
            ))
        }
        FilterState::Editing(buffer) => RatatuiLine::from(vec![
            prompt,
            Span::raw(buffer.content().to_string()),
            Span::styled(" ", theme::cursor_style()),
        ]),
        FilterState::Applied(query) => RatatuiLine::from(vec![
            prompt,
            Span::raw(query.clone()),
            Span::styled(
                format!("  ({} shown)", notes.visible().len()),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]),
    }
}

fn list_item(title: &str, description: &str, selected: bool) -> ListItem<'static> {
    let (gutter, title_style, desc_style) = if selected {
        (
            theme::GLYPH_SELECTED,
            Style::default()
                .fg(theme::LIST_SELECTED)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(theme::LIST_SELECTED),
        )
    } else {
        (
            theme::GLYPH_UNSELECTED,
            Style::default(),
            Style::default().fg(theme::LIST_DESCRIPTION),
        )
    };
    let gutter_style = Style::default().fg(theme::LIST_SELECTED);

    ListItem::new(Text::from(vec![
        RatatuiLine::from(vec![
            Span::styled(gutter, gutter_style),
            Span::styled(title.to_string(), title_style),
        ]),
        RatatuiLine::from(vec![
            Span::styled(gutter, gutter_style),
            Span::styled(description.to_string(), desc_style),
        ]),
        RatatuiLine::raw(""),
    ]))
}

fn list_help_line() -> RatatuiLine<'static> {
    let muted = Style::default().fg(theme::TEXT_MUTED);
    let mut spans = vec![Span::styled("↑/k ↓/j move  / filter", muted)];
    for command in [Command::Confirm, Command::Delete] {
        if let Some(binding) = command.binding() {
            spans.push(Span::styled(
                format!("  {} {}", binding.key, binding.description),
                muted,
            ));
        }
    }
    RatatuiLine::from(spans)
}
