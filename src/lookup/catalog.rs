//! Bank cashback catalog.
//!
//! The catalog file maps bank names to category lists:
//!
//! ```json
//! { "BankA": [ { "name": "Dining", "mcc": ["5812", "5814"] } ] }
//! ```
//!
//! Banks keep the order they appear in the file, which is also the column
//! order of the lookup table.

use crate::error::{CatalogError, CatalogResult};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// One cashback category of a bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name of the category.
    pub name: String,
    /// Merchant category codes covered by it.
    pub mcc: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, mcc: &[&str]) -> Self {
        Self {
            name: name.into(),
            mcc: mcc.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Whether any of `codes` is covered by this category.
    pub fn covers<'a>(&self, mut codes: impl Iterator<Item = &'a str>) -> bool {
        codes.any(|code| self.mcc.iter().any(|c| c == code))
    }
}

/// A bank and its categories, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pub name: String,
    pub categories: Vec<Category>,
}

/// All banks, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankCatalog {
    banks: Vec<Bank>,
}

impl BankCatalog {
    pub fn new(banks: Vec<Bank>) -> Self {
        Self { banks }
    }

    /// Add a bank at the end.
    pub fn with_bank(mut self, name: impl Into<String>, categories: Vec<Category>) -> Self {
        self.banks.push(Bank {
            name: name.into(),
            categories,
        });
        self
    }

    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    pub fn bank_names(&self) -> impl Iterator<Item = &str> {
        self.banks.iter().map(|b| b.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Parse a catalog document.
    pub fn from_json(content: &str) -> CatalogResult<Self> {
        serde_json::from_str(content).map_err(|e| CatalogError::InvalidFormat(e.to_string()))
    }

    /// Load a catalog from `path`.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let catalog = Self::from_json(&content)?;
        debug!(banks = catalog.banks.len(), file = %path.display(), "loaded bank catalog");
        Ok(catalog)
    }

    /// Load a catalog from `path`, treating a missing file as an empty catalog.
    pub fn load_or_empty(path: &Path) -> CatalogResult<Self> {
        if !path.exists() {
            warn!(file = %path.display(), "no bank catalog found, lookups will show no banks");
            return Ok(Self::default());
        }

        Self::load(path)
    }
}

impl<'de> Deserialize<'de> for BankCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = BankCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of bank names to category lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut banks: Vec<Bank> = Vec::new();

                while let Some((name, categories)) = map.next_entry::<String, Vec<Category>>()? {
                    if banks.iter().any(|b| b.name == name) {
                        return Err(de::Error::custom(format!("duplicate bank '{}'", name)));
                    }
                    banks.push(Bank { name, categories });
                }

                Ok(BankCatalog { banks })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
