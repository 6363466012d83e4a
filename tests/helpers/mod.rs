#![allow(dead_code)]

use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tempfile::TempDir;

use jotter::app::{App, ModeKind};
use jotter::config::DisplayZone;
use jotter::error::VaultError;
use jotter::handlers;
use jotter::storage::Vault;
use jotter::ui;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

pub struct TestContext {
    pub app: App,
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let vault = Vault::open(temp_dir.path().join("vault"), DisplayZone::Local)
            .expect("Failed to open vault");
        let mut app = App::with_vault(vault);
        app.resize(WIDTH, HEIGHT);

        Self { app, temp_dir }
    }

    pub fn with_notes(notes: &[(&str, &str)]) -> Self {
        let ctx = Self::new();
        for (title, content) in notes {
            ctx.write_note(title, content);
        }
        ctx
    }

    pub fn press(&mut self, key: KeyCode) {
        self.try_key(KeyEvent::new(key, KeyModifiers::NONE))
            .expect("key press failed");
    }

    pub fn ctrl(&mut self, c: char) {
        self.try_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .expect("key press failed");
    }

    pub fn try_ctrl(&mut self, c: char) -> Result<(), VaultError> {
        self.try_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    pub fn try_key(&mut self, key: KeyEvent) -> Result<(), VaultError> {
        handlers::handle_event(&mut self.app, Event::Key(key))
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '\n' => self.press(KeyCode::Enter),
                c => self.press(KeyCode::Char(c)),
            }
        }
    }

    /// Ctrl+n, name, Enter.
    pub fn create_note(&mut self, name: &str) {
        self.ctrl('n');
        self.type_str(name);
        self.press(KeyCode::Enter);
    }

    /// Ctrl+l, then moves the selection onto `title`.
    pub fn select_note(&mut self, title: &str) {
        self.ctrl('l');
        let index = self
            .app
            .notes
            .visible()
            .iter()
            .position(|n| n.title == title)
            .unwrap_or_else(|| panic!("{title} not listed"));
        self.press(KeyCode::Home);
        for _ in 0..index {
            self.press(KeyCode::Down);
        }
    }

    /// Ctrl+l, select `title`, Enter.
    pub fn open_note(&mut self, title: &str) {
        self.select_note(title);
        self.press(KeyCode::Enter);
    }

    pub fn mode(&self) -> ModeKind {
        self.app.mode_kind()
    }

    pub fn vault_path(&self) -> PathBuf {
        self.temp_dir.path().join("vault")
    }

    pub fn note_path(&self, title: &str) -> PathBuf {
        self.vault_path().join(title)
    }

    pub fn write_note(&self, title: &str, content: &str) {
        std::fs::write(self.note_path(title), content).expect("Failed to write note");
    }

    pub fn read_note(&self, title: &str) -> Option<String> {
        std::fs::read_to_string(self.note_path(title)).ok()
    }

    pub fn listed_titles(&self) -> Vec<String> {
        self.app
            .notes
            .visible()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn status_contains(&self, text: &str) -> bool {
        self.app
            .status_message
            .as_ref()
            .is_some_and(|s| s.text.contains(text))
    }

    /// Renders a frame and returns its rows as plain strings.
    pub fn render(&self) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|f| ui::render_app(f, &self.app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn screen_contains(&self, text: &str) -> bool {
        self.render().iter().any(|line| line.contains(text))
    }

    /// Verify invariants that must always hold after any operation.
    pub fn verify_invariants(&self) {
        self.verify_selection_bounds();
        self.verify_prompt_limit();
    }

    fn verify_selection_bounds(&self) {
        let count = self.app.notes.visible().len();
        let selected = self.app.notes.selected_index();
        if count > 0 {
            assert!(
                selected < count,
                "Selection {selected} out of bounds (visible={count})"
            );
        } else {
            assert_eq!(selected, 0, "Selection on an empty list");
        }
    }

    fn verify_prompt_limit(&self) {
        let len = self.app.prompt.content().chars().count();
        assert!(
            len <= jotter::app::PROMPT_CHAR_LIMIT,
            "Prompt holds {len} chars"
        );
        assert!(self.app.prompt.cursor_char_pos() <= len);
    }
}
