mod lifecycle;
mod note_list;

pub use note_list::{FilterState, NoteList};

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::config::Config;
use crate::cursor::CursorBuffer;
use crate::error::VaultError;
use crate::storage::{NoteHandle, Vault};
use crate::ui::{self, theme};

/// Longest name the new-file prompt accepts.
pub const PROMPT_CHAR_LIMIT: usize = 155;

pub const PROMPT_PLACEHOLDER: &str = "What would you like to call it?";
pub const EDITOR_PLACEHOLDER: &str = "Write your note here...";

/// An open note: the file handle plus the editor primed with its content.
pub struct EditSession {
    handle: NoteHandle,
    editor: TextArea<'static>,
}

impl EditSession {
    #[must_use]
    pub fn new(handle: NoteHandle, content: &str) -> Self {
        let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let mut editor = TextArea::new(lines);
        editor.set_placeholder_text(EDITOR_PLACEHOLDER);
        editor.set_placeholder_style(Style::default().fg(theme::TEXT_MUTED));
        editor.set_cursor_line_style(Style::default());
        editor.set_cursor_style(theme::cursor_style());
        Self { handle, editor }
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.handle.title()
    }

    #[must_use]
    pub fn content(&self) -> String {
        self.editor.lines().join("\n")
    }

    #[must_use]
    pub fn editor(&self) -> &TextArea<'static> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.editor
    }

    pub(crate) fn into_parts(self) -> (NoteHandle, String) {
        let content = self.content();
        (self.handle, content)
    }
}

/// Which surface is active. Only `Editing` holds an open note.
pub enum Mode {
    Idle,
    PromptingNewFile,
    Editing(EditSession),
    Listing,
}

/// Field-less view of [`Mode`], handy for comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeKind {
    Idle,
    PromptingNewFile,
    Editing,
    Listing,
}

impl Mode {
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Idle => ModeKind::Idle,
            Mode::PromptingNewFile => ModeKind::PromptingNewFile,
            Mode::Editing(_) => ModeKind::Editing,
            Mode::Listing => ModeKind::Listing,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    pub mode: Mode,
    pub prompt: CursorBuffer,
    pub notes: NoteList,
    pub terminal_size: (u16, u16),
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    vault: Vault,
}

impl App {
    /// Builds the app from config, creating the vault directory if needed.
    pub fn new(config: &Config) -> Result<Self, VaultError> {
        Ok(Self::with_vault(Vault::from_config(config)?))
    }

    /// Creates an app around an already opened vault (for testing and main)
    #[must_use]
    pub fn with_vault(vault: Vault) -> Self {
        Self {
            mode: Mode::Idle,
            prompt: CursorBuffer::with_char_limit(PROMPT_CHAR_LIMIT),
            notes: NoteList::new(),
            terminal_size: (0, 0),
            status_message: None,
            should_quit: false,
            vault,
        }
    }

    #[must_use]
    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    #[must_use]
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&EditSession> {
        match &self.mode {
            Mode::Editing(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.mode {
            Mode::Editing(session) => Some(session),
            _ => None,
        }
    }

    /// Editor content of the open note, if any.
    #[must_use]
    pub fn editor_content(&self) -> Option<String> {
        self.session().map(EditSession::content)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: msg.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: msg.into(),
            is_error: true,
        });
    }

    /// Records the new terminal size and recomputes the list's page size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.notes.set_page_size(ui::list_page_size(height));
    }

    /// Stops the event loop. An open note is dropped without saving.
    pub fn quit(&mut self) {
        if let Some(session) = self.session() {
            tracing::warn!(note = %session.title(), "quitting with an unsaved note open");
        }
        self.should_quit = true;
    }
}
