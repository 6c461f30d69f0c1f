//! In-memory shop storage.

use super::ShopStore;
use crate::error::StorageResult;
use crate::types::ShopRecord;
use std::sync::Mutex;

/// Shop storage held in process memory.
///
/// `None` models an absent key, which is distinct from a saved empty list.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Option<Vec<ShopRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    pub fn with_records(records: Vec<ShopRecord>) -> Self {
        Self {
            records: Mutex::new(Some(records)),
        }
    }

    /// Whether anything is stored under the key.
    pub fn is_present(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<ShopRecord>>> {
        // A poisoned lock still holds a consistent list: writes replace it whole.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ShopStore for MemoryStore {
    fn load(&self) -> StorageResult<Vec<ShopRecord>> {
        Ok(self.lock().clone().unwrap_or_default())
    }

    fn save(&self, records: &[ShopRecord]) -> StorageResult<()> {
        *self.lock() = Some(records.to_vec());
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        *self.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_versus_empty() {
        let store = MemoryStore::new();
        assert!(!store.is_present());
        assert!(store.load().unwrap().is_empty());

        store.save(&[]).unwrap();
        assert!(store.is_present());

        store.clear().unwrap();
        assert!(!store.is_present());
    }
}
