//! Core type definitions using newtype patterns for type safety.
//!
//! Shops carry a generated [`ShopId`] so that deletion never depends on
//! the position a record happened to be rendered at.

mod shop;
mod shop_id;

pub use shop::{validate_entries, RecordIssue, ShopEntry, ShopRecord, MIR_LABEL};
pub use shop_id::{ShopId, ShopIdError};
