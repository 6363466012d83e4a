use std::fs;
use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};

use super::vault::Vault;
use crate::config::DisplayZone;
use crate::error::VaultError;

const MODIFIED_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Snapshot of one note taken when the list was refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    /// File name, extension included.
    pub title: String,
    /// Modification time, rendered in the vault's display zone.
    pub description: String,
}

impl NoteSummary {
    #[must_use]
    pub fn new(title: String, modified: SystemTime, zone: DisplayZone) -> Self {
        let modified = DateTime::<Utc>::from(modified);
        let description = format!("Modified: {}", format_modified(modified, zone));
        Self { title, description }
    }
}

fn format_modified(modified: DateTime<Utc>, zone: DisplayZone) -> String {
    match zone {
        DisplayZone::Named(tz) => modified
            .with_timezone(&tz)
            .format(MODIFIED_FORMAT)
            .to_string(),
        DisplayZone::Local => modified
            .with_timezone(&Local)
            .format(MODIFIED_FORMAT)
            .to_string(),
    }
}

impl Vault {
    /// Lists every regular file in the vault, in file-name order.
    ///
    /// Entries whose metadata can't be read are skipped; an unreadable vault is fatal.
    pub fn list_entries(&self) -> Result<Vec<NoteSummary>, VaultError> {
        let read_err = |source| VaultError::ReadDir {
            path: self.root().to_path_buf(),
            source,
        };

        let mut notes = Vec::new();
        for entry in fs::read_dir(self.root()).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::debug!(entry = ?entry.file_name(), "skipping entry: {e}");
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }
            let Ok(modified) = metadata.modified() else {
                continue;
            };

            let title = entry.file_name().to_string_lossy().into_owned();
            notes.push(NoteSummary::new(title, modified, self.zone()));
        }

        notes.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_named_zone() {
        let utc = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let zone = DisplayZone::Named(chrono_tz::Asia::Kolkata);
        assert_eq!(format_modified(utc, zone), "2026-01-15 05:30 PM");
    }

    #[test]
    fn description_has_modified_prefix() {
        let when = SystemTime::UNIX_EPOCH;
        let zone = DisplayZone::Named(chrono_tz::UTC);
        let summary = NoteSummary::new("a.md".to_string(), when, zone);
        assert_eq!(summary.description, "Modified: 1970-01-01 12:00 AM");
    }

    #[test]
    fn lists_files_sorted_and_skips_dirs() {
        let temp = tempfile::TempDir::new().unwrap();
        let vault = Vault::open(temp.path(), DisplayZone::Local).unwrap();
        fs::write(temp.path().join("zebra.md"), "").unwrap();
        fs::write(temp.path().join("apple.md"), "").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();

        let titles: Vec<String> = vault
            .list_entries()
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();

        assert_eq!(titles, vec!["apple.md", "zebra.md"]);
    }

    #[test]
    fn unreadable_vault_is_fatal() {
        let temp = tempfile::TempDir::new().unwrap();
        let vault = Vault::open(temp.path().join("vault"), DisplayZone::Local).unwrap();
        fs::remove_dir(vault.root()).unwrap();

        assert!(matches!(
            vault.list_entries(),
            Err(VaultError::ReadDir { .. })
        ));
    }
}
