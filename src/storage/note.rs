use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::vault::Vault;
use crate::error::{CreateError, SaveError, SaveStep};

/// Exclusive in-process access to one note's file for the length of an edit session.
///
/// Consumed exactly once, either by [`Vault::save_note`] or by [`NoteHandle::discard`].
#[derive(Debug)]
pub struct NoteHandle {
    file: File,
    path: PathBuf,
}

impl NoteHandle {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the note, e.g. `groceries.md`.
    #[must_use]
    pub fn title(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Releases the file without writing anything.
    pub fn discard(self) {
        tracing::debug!(path = %self.path.display(), "discarded note handle");
    }

    fn write_content(mut self, content: &str) -> Result<(), SaveError> {
        let path = &self.path;

        self.file
            .set_len(0)
            .map_err(step_failed(SaveStep::Truncate, path))?;
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(step_failed(SaveStep::Seek, path))?;
        self.file
            .write_all(content.as_bytes())
            .map_err(step_failed(SaveStep::Write, path))?;
        self.file
            .sync_all()
            .map_err(step_failed(SaveStep::Sync, path))?;
        Ok(())
    }
}

fn step_failed(step: SaveStep, path: &Path) -> impl FnOnce(io::Error) -> SaveError + '_ {
    move |source| SaveError {
        step,
        path: path.to_path_buf(),
        source,
    }
}

impl Vault {
    /// Creates `<name>.md` empty, refusing to touch an existing file.
    pub fn create_note(&self, name: &str) -> Result<NoteHandle, CreateError> {
        let path = self.note_path(&Self::file_name_for(name));
        if path.exists() {
            return Err(CreateError::AlreadyExists { path });
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => CreateError::AlreadyExists { path: path.clone() },
                _ => CreateError::Io {
                    path: path.clone(),
                    source,
                },
            })?;

        tracing::info!(path = %path.display(), "created note");
        Ok(NoteHandle { file, path })
    }

    /// Reads the note, then reopens it read-write (no truncation) for a later save.
    ///
    /// Bytes that aren't UTF-8 are replaced with U+FFFD.
    pub fn open_note(&self, title: &str) -> io::Result<(String, NoteHandle)> {
        let path = self.note_path(title);
        let bytes = fs::read(&path)?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), "note is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let file = OpenOptions::new().read(true).write(true).open(&path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "opened note");
        Ok((content, NoteHandle { file, path }))
    }

    /// Replaces the note's content with `content`, releasing the handle whatever happens.
    pub fn save_note(&self, handle: NoteHandle, content: &str) -> Result<(), SaveError> {
        let path = handle.path.clone();
        handle.write_content(content)?;
        tracing::info!(path = %path.display(), bytes = content.len(), "saved note");
        Ok(())
    }

    pub fn delete_note(&self, title: &str) -> io::Result<()> {
        let path = self.note_path(title);
        fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "deleted note");
        Ok(())
    }
}
