use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures the app cannot continue after. Only the binary decides to exit.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("could not resolve the home directory")]
    NoHomeDir,
    #[error("can't create vault directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("error reading notes in {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("can't create note {}: {source}", .path.display())]
    CreateNote { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum CreateError {
    /// A note with that name exists; nothing was touched.
    #[error("{} already exists", .path.display())]
    AlreadyExists { path: PathBuf },
    #[error("can't create note {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStep {
    Truncate,
    Seek,
    Write,
    Sync,
}

impl fmt::Display for SaveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SaveStep::Truncate => "truncate",
            SaveStep::Seek => "seek",
            SaveStep::Write => "write",
            SaveStep::Sync => "sync",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("can not save {} ({step} failed): {source}", .path.display())]
pub struct SaveError {
    pub step: SaveStep,
    pub path: PathBuf,
    pub source: io::Error,
}
