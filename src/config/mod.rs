//! Configuration management for mccbook.
//!
//! Provides XDG-compliant paths for settings, the shop store and the bank
//! catalog, plus the application settings file.

mod settings;

pub use settings::{AppSettings, Paths, CATALOG_FILE_NAME, STORE_FILE_NAME};
