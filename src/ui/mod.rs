mod footer;
mod layout;
pub mod theme;
mod views;

use ratatui::Frame;

use crate::app::{App, Mode};

use layout::AppLayout;
pub use layout::list_page_size;

/// Draws the whole frame from `app`. Reads state only.
pub fn render_app(f: &mut Frame<'_>, app: &App) {
    let layout = AppLayout::new(f.area());

    views::render_header(f, layout.header);

    match &app.mode {
        Mode::Idle => {}
        Mode::PromptingNewFile => views::render_prompt(f, &app.prompt, layout.body),
        Mode::Editing(session) => views::render_editor(f, session, layout.body),
        Mode::Listing => views::render_list(f, &app.notes, layout.body),
    }

    if let Some(status) = &app.status_message {
        footer::render_status(f, status, layout.status);
    }
    footer::render_footer(f, layout.footer);
}
