use crate::error::{CreateError, VaultError};
use crate::storage::Vault;

use super::{App, EditSession, Mode};

/// Longest file name most filesystems accept, in bytes.
const MAX_FILE_NAME_BYTES: usize = 255;

#[cfg(windows)]
const PATH_SEPARATORS: &[char] = &['/', '\\'];
#[cfg(not(windows))]
const PATH_SEPARATORS: &[char] = &['/'];

/// Rejects names that would land in a subdirectory or exceed the file name limit.
fn is_valid_note_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(PATH_SEPARATORS)
        && Vault::file_name_for(name).len() <= MAX_FILE_NAME_BYTES
}

impl App {
    /// Shows the new-file prompt with an empty buffer. Ignored while a note is open.
    pub fn start_new_file(&mut self) {
        if self.is_editing() {
            return;
        }
        self.prompt.clear();
        self.mode = Mode::PromptingNewFile;
    }

    /// Re-reads the vault and shows the list. Ignored while a note is open.
    pub fn show_list(&mut self) -> Result<(), VaultError> {
        if self.is_editing() {
            return Ok(());
        }
        let items = self.vault.list_entries()?;
        self.notes.replace(items);
        self.mode = Mode::Listing;
        Ok(())
    }

    /// Deletes the selected note and refreshes the list. Only acts while listing.
    pub fn delete_selected(&mut self) -> Result<(), VaultError> {
        if !matches!(self.mode, Mode::Listing) {
            return Ok(());
        }
        let Some(title) = self.notes.selected().map(|n| n.title.clone()) else {
            return Ok(());
        };

        if let Err(e) = self.vault.delete_note(&title) {
            tracing::warn!(note = %title, "error deleting file: {e}");
            self.set_error(format!("Error deleting {title}: {e}"));
            return Ok(());
        }

        let items = self.vault.list_entries()?;
        self.notes.refresh(items);
        self.set_status(format!("Deleted {title}"));
        Ok(())
    }

    /// Opens the selected note for editing. Returns false when nothing is selected.
    pub fn open_selected(&mut self) -> bool {
        if !matches!(self.mode, Mode::Listing) {
            return false;
        }
        let Some(title) = self.notes.selected().map(|n| n.title.clone()) else {
            return false;
        };

        match self.vault.open_note(&title) {
            Ok((content, handle)) => {
                self.mode = Mode::Editing(EditSession::new(handle, &content));
            }
            Err(e) => {
                tracing::warn!(note = %title, "error reading the file: {e}");
                self.set_error(format!("Error reading {title}: {e}"));
            }
        }
        true
    }

    /// Creates a note named after the prompt buffer and starts editing it.
    ///
    /// An existing name leaves the prompt open with the buffer intact. Returns false when the
    /// buffer is empty.
    pub fn create_from_prompt(&mut self) -> Result<bool, VaultError> {
        if !matches!(self.mode, Mode::PromptingNewFile) || self.prompt.is_empty() {
            return Ok(false);
        }

        let name = self.prompt.content().to_string();
        if !is_valid_note_name(&name) {
            self.set_error(format!("Invalid note name: {name}"));
            return Ok(true);
        }

        match self.vault.create_note(&name) {
            Ok(handle) => {
                self.prompt.clear();
                self.mode = Mode::Editing(EditSession::new(handle, ""));
                Ok(true)
            }
            Err(CreateError::AlreadyExists { path }) => {
                tracing::debug!(path = %path.display(), "note already exists");
                let title = path.file_name().map_or_else(
                    || name.clone(),
                    |n| n.to_string_lossy().into_owned(),
                );
                self.set_status(format!("{title} already exists"));
                Ok(true)
            }
            Err(CreateError::Io { path, source }) => Err(VaultError::CreateNote { path, source }),
        }
    }

    /// Writes the editor to disk and returns to idle.
    ///
    /// The handle is released even when the write fails; the failure is only reported.
    pub fn save_current(&mut self) {
        if !self.is_editing() {
            return;
        }
        let Mode::Editing(session) = std::mem::replace(&mut self.mode, Mode::Idle) else {
            return;
        };

        let (handle, content) = session.into_parts();
        let title = handle.title();
        match self.vault.save_note(handle, &content) {
            Ok(()) => self.set_status(format!("Saved {title}")),
            Err(e) => {
                tracing::error!("{e}");
                self.set_error(format!("Can not save {title} :("));
            }
        }
    }

    /// Backs out of the active surface. Edits in an open note are discarded.
    pub fn cancel(&mut self) {
        match std::mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Editing(session) => {
                let (handle, _) = session.into_parts();
                handle.discard();
            }
            Mode::Listing if self.notes.is_filtering() => {
                self.notes.cancel_filter();
                self.mode = Mode::Listing;
            }
            Mode::Idle | Mode::PromptingNewFile | Mode::Listing => {}
        }
    }
}
