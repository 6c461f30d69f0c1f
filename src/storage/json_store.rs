//! JSON file-based shop storage.
//!
//! The list is one pretty-printed JSON array. Writes go to a temporary
//! sibling file which is then renamed over the original.
//!
//! Records written without an `id` or `addedAt` (older stores, hand-copied
//! exports) are completed on load and written back, so ids stay stable
//! between runs.

use super::ShopStore;
use crate::error::{StorageError, StorageResult};
use crate::types::{ShopId, ShopRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A record as found on disk, before missing fields are filled in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredShop {
    id: Option<ShopId>,
    name: String,
    mcc: String,
    #[serde(default)]
    mcc_mir: Option<String>,
    added_at: Option<DateTime<Utc>>,
}

impl StoredShop {
    /// Whether the record lacks a field that must be generated.
    fn is_incomplete(&self) -> bool {
        self.id.is_none() || self.added_at.is_none()
    }

    fn complete(self) -> ShopRecord {
        ShopRecord {
            id: self.id.unwrap_or_default(),
            name: self.name,
            mcc: self.mcc,
            mcc_mir: self.mcc_mir,
            added_at: self.added_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Shop storage backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    file: PathBuf,
}

impl JsonFileStore {
    /// Create a store at `file`, creating its parent directory.
    pub fn new(file: impl Into<PathBuf>) -> StorageResult<Self> {
        let file = file.into();

        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::DirectoryError(e.to_string()))?;
        }

        Ok(Self { file })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Where the next unreadable store file will be moved.
    ///
    /// The first one goes to `<file>.corrupt`, later ones to `<file>.corrupt.1`,
    /// `<file>.corrupt.2` and so on; an earlier copy is never replaced.
    pub fn quarantine_path(&self) -> PathBuf {
        let mut base = self.file.as_os_str().to_owned();
        base.push(".corrupt");

        let mut candidate = PathBuf::from(&base);
        let mut n = 0;
        while candidate.exists() {
            n += 1;
            let mut name = base.clone();
            name.push(format!(".{}", n));
            candidate = PathBuf::from(name);
        }
        candidate
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.file.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn quarantine(&self, reason: &str) -> StorageResult<()> {
        let target = self.quarantine_path();
        warn!(
            file = %self.file.display(),
            moved_to = %target.display(),
            "stored shop list is unreadable ({}), starting with an empty list",
            reason
        );
        fs::rename(&self.file, &target).map_err(|e| StorageError::LoadFailed(e.to_string()))
    }
}

impl ShopStore for JsonFileStore {
    fn load(&self) -> StorageResult<Vec<ShopRecord>> {
        let content = match fs::read_to_string(&self.file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(file = %self.file.display(), "no stored shops yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::LoadFailed(e.to_string())),
        };

        let stored = match serde_json::from_str::<Vec<StoredShop>>(&content) {
            Ok(stored) => stored,
            Err(e) => {
                self.quarantine(&e.to_string())?;
                return Ok(Vec::new());
            }
        };

        let incomplete = stored.iter().filter(|s| s.is_incomplete()).count();
        let records: Vec<ShopRecord> = stored.into_iter().map(StoredShop::complete).collect();

        if incomplete > 0 {
            info!(count = incomplete, "assigned ids to stored shops");
            self.save(&records)?;
        }

        debug!(count = records.len(), "loaded shops");
        Ok(records)
    }

    fn save(&self, records: &[ShopRecord]) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(records)?;
        let temp = self.temp_path();

        fs::write(&temp, content).map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        fs::rename(&temp, &self.file).map_err(|e| StorageError::SaveFailed(e.to_string()))?;

        debug!(count = records.len(), file = %self.file.display(), "saved shops");
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        match fs::remove_file(&self.file) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::SaveFailed(e.to_string())),
        }
    }
}
