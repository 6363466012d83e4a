use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, DisplayZone};
use crate::error::VaultError;

/// Extension appended to every note created from the prompt.
const NOTE_EXTENSION: &str = "md";

#[cfg(unix)]
const VAULT_DIR_MODE: u32 = 0o750;

/// The directory that holds every note, plus how to present its timestamps.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    zone: DisplayZone,
}

impl Vault {
    /// Builds the vault described by `config`, creating the directory if needed.
    pub fn from_config(config: &Config) -> Result<Self, VaultError> {
        let root = config.vault_path().ok_or(VaultError::NoHomeDir)?;
        Self::open(root, config.display_zone())
    }

    /// Ensures `root` exists (owner-restricted on unix) and returns a vault rooted there.
    pub fn open(root: impl Into<PathBuf>, zone: DisplayZone) -> Result<Self, VaultError> {
        let root = root.into();
        create_vault_dir(&root).map_err(|source| VaultError::CreateDir {
            path: root.clone(),
            source,
        })?;
        tracing::debug!(path = %root.display(), "vault ready");
        Ok(Self { root, zone })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    /// Path of the note whose file name is `title`.
    #[must_use]
    pub fn note_path(&self, title: &str) -> PathBuf {
        self.root.join(title)
    }

    /// File name a prompt entry maps to.
    #[must_use]
    pub fn file_name_for(name: &str) -> String {
        format!("{name}.{NOTE_EXTENSION}")
    }
}

#[cfg(unix)]
fn create_vault_dir(root: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(VAULT_DIR_MODE)
        .create(root)
}

#[cfg(not(unix))]
fn create_vault_dir(root: &Path) -> io::Result<()> {
    fs::create_dir_all(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_missing_parents() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("a").join("b").join("vault");

        let vault = Vault::open(&root, DisplayZone::Local).unwrap();

        assert!(root.is_dir());
        assert_eq!(vault.root(), root.as_path());
    }

    #[test]
    fn open_existing_dir_is_fine() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(Vault::open(temp.path(), DisplayZone::Local).is_ok());
        assert!(Vault::open(temp.path(), DisplayZone::Local).is_ok());
    }

    #[test]
    fn open_fails_when_root_is_a_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();

        let err = Vault::open(blocker.join("vault"), DisplayZone::Local).unwrap_err();
        assert!(matches!(err, VaultError::CreateDir { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn new_vault_is_owner_restricted() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("vault");
        Vault::open(&root, DisplayZone::Local).unwrap();

        let mode = fs::metadata(&root).unwrap().permissions().mode() & 0o777;
        // umask may clear further bits, never add any
        assert_eq!(mode & !VAULT_DIR_MODE, 0);
    }

    #[test]
    fn file_name_appends_extension() {
        assert_eq!(Vault::file_name_for("groceries"), "groceries.md");
    }
}
