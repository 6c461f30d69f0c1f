//! Error types for mccbook.
//!
//! Uses `thiserror` for ergonomic error definitions. Every directory
//! operation returns a typed error; the CLI decides how to present it.

use crate::types::RecordIssue;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by shop directory operations.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("{0}")]
    Validation(String),

    #[error("shop '{name}' with MCC {mcc} already exists")]
    Duplicate { name: String, mcc: String },

    #[error("no shop with id '{0}'")]
    NotFound(String),

    #[error("ambiguous id prefix '{prefix}': {matches} matches")]
    AmbiguousId { prefix: String, matches: usize },

    #[error("the shop list is already empty")]
    NothingToDelete,

    #[error("failed to read import file: {0}")]
    Parse(String),

    #[error("invalid file format: expected a JSON array of shops")]
    Format,

    #[error("the import file does not contain any shops")]
    EmptyImport,

    #[error("the import file contains {} invalid record(s)", .0.len())]
    InvalidRecords(Vec<RecordIssue>),

    #[error("the shop list is empty, nothing to export")]
    EmptyExport,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<serde_json::Error> for ShopError {
    fn from(e: serde_json::Error) -> Self {
        ShopError::Storage(e.into())
    }
}

/// Result type alias for directory operations.
pub type ShopResult<T> = Result<T, ShopError>;

/// Errors from the persistent shop store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage directory error: {0}")]
    DirectoryError(String),

    #[error("failed to load shops: {0}")]
    LoadFailed(String),

    #[error("failed to save shops: {0}")]
    SaveFailed(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors while locating or reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a home directory for configuration")]
    DirectoryNotFound,

    #[error("failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors while loading the bank catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    InvalidFormat(String),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Top-level error for CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
