//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and data.

use crate::cli::OutputFormat;
use crate::directory::EXPORT_FILE_NAME;
use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the shop store inside the data directory.
pub const STORE_FILE_NAME: &str = "shops.json";

/// File name of the bank catalog inside the config directory.
pub const CATALOG_FILE_NAME: &str = "banks.json";

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/mccbook)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/mccbook)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn discover() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "mccbook", "mccbook")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        })
    }

    /// Paths rooted at an explicit base directory.
    pub fn rooted_at(base: &Path) -> Self {
        Self {
            config_dir: base.join("config"),
            data_dir: base.join("data"),
        }
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the default path of the shop store.
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    /// Get the default path of the bank catalog.
    pub fn catalog_file(&self) -> PathBuf {
        self.config_dir.join(CATALOG_FILE_NAME)
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Shop store location, overriding the data directory default.
    pub store_file: Option<PathBuf>,
    /// Bank catalog location, overriding the config directory default.
    pub catalog_file: Option<PathBuf>,
    /// Output format for `list` and `lookup`.
    pub default_format: OutputFormat,
    /// Text shown when a bank has no category for a shop.
    pub no_match_marker: String,
    /// File name used by `export` when no output path is given.
    pub export_file_name: String,
    /// Ask before clearing the whole list.
    pub confirm_clear: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            store_file: None,
            catalog_file: None,
            default_format: OutputFormat::Plain,
            no_match_marker: "✘".to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            confirm_clear: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    ///
    /// A missing settings file yields the defaults.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();

        if !file.exists() {
            debug!(file = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Where the shop store lives.
    pub fn store_path(&self, paths: &Paths) -> PathBuf {
        self.store_file.clone().unwrap_or_else(|| paths.store_file())
    }

    /// Where the catalog lives, and whether that location was configured explicitly.
    pub fn catalog_path(&self, paths: &Paths) -> (PathBuf, bool) {
        match &self.catalog_file {
            Some(path) => (path.clone(), true),
            None => (paths.catalog_file(), false),
        }
    }
}
