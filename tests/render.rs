mod helpers;

use crossterm::event::KeyCode;
use helpers::TestContext;

#[test]
fn idle_shows_only_header_and_footer() {
    let ctx = TestContext::new();
    let screen = ctx.render();

    assert!(screen.iter().any(|l| l.contains("Welcome to jotter")));
    assert!(screen.iter().any(|l| l.contains("Ctrl+n: new file")));
    assert!(screen.iter().any(|l| l.contains("Ctrl+q: quit")));
    assert!(!ctx.screen_contains("All notes"));
    assert!(!ctx.screen_contains("What would you like to call it?"));
}

#[test]
fn prompt_shows_placeholder_then_typed_name() {
    let mut ctx = TestContext::new();

    ctx.ctrl('n');
    assert!(ctx.screen_contains("What would you like to call it?"));

    ctx.type_str("meeting");
    assert!(ctx.screen_contains("> meeting"));
    assert!(!ctx.screen_contains("What would you like to call it?"));
}

#[test]
fn editor_shows_note_name_and_body() {
    let mut ctx = TestContext::with_notes(&[("plan.md", "step one")]);

    ctx.open_note("plan.md");

    assert!(ctx.screen_contains(" plan.md "));
    assert!(ctx.screen_contains("step one"));
    assert!(!ctx.screen_contains("All notes"));
}

#[test]
fn empty_note_shows_editor_placeholder() {
    let mut ctx = TestContext::new();

    ctx.create_note("blank");

    assert!(ctx.screen_contains("Write your note here..."));
}

#[test]
fn list_shows_titles_descriptions_and_help() {
    let mut ctx = TestContext::with_notes(&[("groceries.md", ""), ("ideas.md", "")]);

    ctx.ctrl('l');

    assert!(ctx.screen_contains("All notes"));
    assert!(ctx.screen_contains("groceries.md"));
    assert!(ctx.screen_contains("ideas.md"));
    assert!(ctx.screen_contains("Modified: "));
    assert!(ctx.screen_contains("2 notes"));
    assert!(ctx.screen_contains("Ctrl+d delete file"));
}

#[test]
fn empty_list_says_so() {
    let mut ctx = TestContext::new();

    ctx.ctrl('l');

    assert!(ctx.screen_contains("No notes yet."));
}

#[test]
fn filter_line_tracks_query() {
    let mut ctx = TestContext::with_notes(&[("groceries.md", "")]);

    ctx.ctrl('l');
    ctx.press(KeyCode::Char('/'));
    ctx.type_str("xyz");

    assert!(ctx.screen_contains("Filter: xyz"));
    assert!(ctx.screen_contains("No matching notes."));
}

#[test]
fn status_line_shows_last_message() {
    let mut ctx = TestContext::with_notes(&[("dup.md", "")]);

    ctx.create_note("dup");

    assert!(ctx.screen_contains("dup.md already exists"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut ctx = TestContext::with_notes(&[("a.md", "")]);
    ctx.ctrl('l');

    let mut terminal =
        ratatui::Terminal::new(ratatui::backend::TestBackend::new(10, 4)).unwrap();
    terminal
        .draw(|f| jotter::ui::render_app(f, &ctx.app))
        .unwrap();
}
