//! Shop directory operations.
//!
//! [`Directory`] is the admin side of the tool: it is the only code that
//! mutates the store. Each operation loads the full list, changes it, and
//! saves it back; failures leave the store untouched.

mod transfer;

pub use transfer::{ImportSummary, EXPORT_FILE_NAME};

use crate::error::{ShopError, ShopResult};
use crate::storage::ShopStore;
use crate::types::ShopRecord;
use tracing::{debug, info};

/// Admin operations over a [`ShopStore`].
#[derive(Debug)]
pub struct Directory<S> {
    store: S,
}

impl<S: ShopStore> Directory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All shops in display order.
    pub fn list(&self) -> ShopResult<Vec<ShopRecord>> {
        Ok(self.store.load()?)
    }

    /// Add a shop from raw field input.
    ///
    /// Name and code are trimmed and must be non-empty; the МИР code is
    /// optional but may not be blank when given. Fails with
    /// [`ShopError::Duplicate`] if `(name, mcc)` is already stored.
    pub fn add(&self, name: &str, mcc: &str, mcc_mir: Option<&str>) -> ShopResult<ShopRecord> {
        let name = name.trim();
        let mcc = mcc.trim();

        if name.is_empty() || mcc.is_empty() {
            return Err(ShopError::Validation(
                "please fill out both the name and the MCC".to_string(),
            ));
        }

        let mcc_mir = match mcc_mir.map(str::trim) {
            Some("") => {
                return Err(ShopError::Validation(
                    "the МИР code cannot be empty".to_string(),
                ))
            }
            other => other.map(str::to_string),
        };

        let mut records = self.store.load()?;
        if records.iter().any(|r| r.same_identity(name, mcc)) {
            return Err(ShopError::Duplicate {
                name: name.to_string(),
                mcc: mcc.to_string(),
            });
        }

        let record = ShopRecord::new(name, mcc).with_mir(mcc_mir);
        records.push(record.clone());
        self.save_all(&records)?;

        info!(id = %record.id.short(), name = %record.name, mcc = %record.mcc, "added shop");
        Ok(record)
    }

    /// Delete the shop whose id is `id` or starts with it.
    pub fn delete(&self, id: &str) -> ShopResult<ShopRecord> {
        let prefix = id.trim();
        if prefix.is_empty() {
            return Err(ShopError::Validation("a shop id is required".to_string()));
        }

        let mut records = self.store.load()?;
        let matches: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.id.matches_prefix(prefix))
            .map(|(i, _)| i)
            .collect();

        let index = match matches.as_slice() {
            [] => return Err(ShopError::NotFound(prefix.to_string())),
            [index] => *index,
            _ => {
                return Err(ShopError::AmbiguousId {
                    prefix: prefix.to_string(),
                    matches: matches.len(),
                })
            }
        };

        let removed = records.remove(index);
        self.save_all(&records)?;

        info!(id = %removed.id.short(), name = %removed.name, "deleted shop");
        Ok(removed)
    }

    /// Number of stored shops.
    pub fn count(&self) -> ShopResult<usize> {
        Ok(self.store.load()?.len())
    }

    /// Remove every shop. Returns how many were removed.
    ///
    /// Unavailable on an empty list: fails with [`ShopError::NothingToDelete`].
    /// Callers are expected to have confirmed with the user.
    pub fn clear(&self) -> ShopResult<usize> {
        let count = self.count()?;
        if count == 0 {
            return Err(ShopError::NothingToDelete);
        }

        self.store.clear()?;
        info!(count, "cleared shop list");
        Ok(count)
    }

    fn save_all(&self, records: &[ShopRecord]) -> ShopResult<()> {
        debug!(count = records.len(), "writing shop list");
        Ok(self.store.save(records)?)
    }
}
