//! # mccbook - Shop Directory for Cashback Categories
//!
//! mccbook keeps a list of shops with their merchant category codes (MCC)
//! and cross-references them with the cashback categories banks offer.
//!
//! ## Features
//!
//! - **Shop List**: Add, delete, clear, import and export shops
//! - **Stable IDs**: Shops are deleted by id, never by table position
//! - **Lookup**: One column per bank showing which categories cover a shop
//! - **Search**: By name fragment or exact code, including codes no shop uses
//! - **Multiple Output Formats**: Plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust
//! use mccbook::directory::Directory;
//! use mccbook::lookup::{lookup, BankCatalog, Category, LookupCell};
//! use mccbook::storage::MemoryStore;
//!
//! let directory = Directory::new(MemoryStore::new());
//! directory.add("Cafe X", "5812", None).unwrap();
//!
//! let catalog = BankCatalog::default()
//!     .with_bank("BankA", vec![Category::new("Dining", &["5812"])]);
//!
//! let hits = lookup(directory.list().unwrap(), &catalog, "cafe");
//! assert_eq!(hits.rows[0].banks[0].categories, LookupCell::Matches(vec!["Dining".into()]));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Shop records and identifiers
//! - [`storage`] - The `ShopStore` trait with file and in-memory backends
//! - [`directory`] - Add, delete, clear, import and export
//! - [`lookup`] - Bank catalog, join and search
//! - [`config`] - Paths and settings
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod lookup;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use directory::{Directory, ImportSummary};
pub use error::{CliError, ShopError, StorageError};
pub use lookup::{BankCatalog, LookupCell, LookupHits, LookupRow, SearchQuery};
pub use storage::{JsonFileStore, MemoryStore, ShopStore};
pub use types::{ShopId, ShopRecord};
