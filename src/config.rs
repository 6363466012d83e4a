use std::fs;
use std::io;
use std::path::PathBuf;

use chrono_tz::Tz;
use serde::Deserialize;

pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the notes. Defaults to `~/.jotter`.
    #[serde(default)]
    pub vault_dir: Option<String>,
    /// IANA zone used to display modification times.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_dir: None,
            timezone: default_timezone(),
            log_file: None,
        }
    }
}

/// Zone that modification times are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Named(Tz),
    Local,
}

impl Config {
    pub fn load() -> io::Result<Self> {
        let path = get_config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::parse(&content)
        } else {
            Ok(Config::default())
        }
    }

    pub fn parse(content: &str) -> io::Result<Self> {
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Resolves the vault directory, `None` when no home directory is available.
    #[must_use]
    pub fn vault_path(&self) -> Option<PathBuf> {
        match self.vault_dir {
            Some(ref dir) => Some(resolve_path(dir)),
            None => get_default_vault_path(),
        }
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        match self.log_file {
            Some(ref file) => resolve_path(file),
            None => get_config_dir().join("jotter.log"),
        }
    }

    /// Falls back to local time if the zone name is unknown.
    #[must_use]
    pub fn display_zone(&self) -> DisplayZone {
        self.timezone
            .parse::<Tz>()
            .map_or(DisplayZone::Local, DisplayZone::Named)
    }
}

/// Resolve a path to absolute, expanding a leading `~` and joining with cwd if relative.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let expanded = match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
        None if path == "~" => dirs::home_dir(),
        None => None,
    };
    let path = expanded.unwrap_or_else(|| PathBuf::from(path));
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("jotter")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

#[must_use]
pub fn get_default_vault_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".jotter"))
}
