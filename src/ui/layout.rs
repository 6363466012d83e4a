use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows around the body: top margin, banner, gap, status line, footer.
const CHROME_HEIGHT: u16 = 7;

/// Rows the list spends on its title, filter line and help hint.
const LIST_CHROME_HEIGHT: u16 = 3;

/// Rows per list item: title, description, spacer.
const LIST_ITEM_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub footer: Rect,
}

impl AppLayout {
    #[must_use]
    pub fn new(size: Rect) -> Self {
        let padded = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(size)[1];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(padded);

        Self {
            header: chunks[1],
            body: chunks[3],
            status: chunks[4],
            footer: chunks[5],
        }
    }
}

/// How many list items fit on one page of a terminal `height` rows tall.
#[must_use]
pub fn list_page_size(height: u16) -> usize {
    let body = height.saturating_sub(CHROME_HEIGHT);
    let rows = body.saturating_sub(LIST_CHROME_HEIGHT);
    usize::from((rows / LIST_ITEM_HEIGHT).max(1))
}
