//! Shop list persistence.
//!
//! The whole list lives under a single key: every read fetches all of it
//! and every write replaces all of it. [`ShopStore`] is the seam between
//! directory logic and the backing medium.

mod json_store;
mod memory;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StorageResult;
use crate::types::ShopRecord;

/// Whole-collection access to the persisted shop list.
pub trait ShopStore {
    /// Load the stored list. A missing list is an empty one.
    fn load(&self) -> StorageResult<Vec<ShopRecord>>;

    /// Replace the stored list.
    fn save(&self, records: &[ShopRecord]) -> StorageResult<()>;

    /// Remove the stored list entirely.
    fn clear(&self) -> StorageResult<()>;
}
