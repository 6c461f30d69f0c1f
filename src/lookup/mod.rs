//! Read-only lookup view.
//!
//! Joins stored shops against a [`BankCatalog`] and filters them with the
//! search rules in [`search`].

mod catalog;
mod join;
mod search;

pub use catalog::{Bank, BankCatalog, Category};
pub use join::{
    lookup_cell, lookup_row, lookup_rows, matching_categories, BankCell, LookupCell, LookupRow,
};
pub use search::{normalize_term, search, SearchHits, SearchQuery};

use crate::types::ShopRecord;

/// Rows of the lookup table for one search.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupHits {
    pub rows: Vec<LookupRow>,
    /// The only row is a placeholder for a code no stored shop uses.
    pub probe: bool,
}

/// Search `records` with `raw` and join the hits against `catalog`.
pub fn lookup(records: Vec<ShopRecord>, catalog: &BankCatalog, raw: &str) -> LookupHits {
    let hits = search(records, raw);
    LookupHits {
        rows: lookup_rows(&hits.records, catalog),
        probe: hits.probe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_example_row() {
        let records = vec![ShopRecord::new("Cafe X", "5812")];
        let catalog =
            BankCatalog::default().with_bank("BankA", vec![Category::new("Dining", &["5812"])]);

        let LookupHits { rows, probe } = lookup(records, &catalog, "");
        assert!(!probe);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Cafe X");
        assert_eq!(rows[0].codes, "5812");
        assert_eq!(
            rows[0].banks[0].categories,
            LookupCell::Matches(vec!["Dining".to_string()])
        );
    }

    #[test]
    fn test_lookup_probe_joins_catalog() {
        let catalog =
            BankCatalog::default().with_bank("BankA", vec![Category::new("Groceries", &["5411"])]);

        let LookupHits { rows, probe } = lookup(Vec::new(), &catalog, "5411");
        assert!(probe);
        assert_eq!(rows[0].name, "MCC 5411");
        assert!(rows[0].banks[0].categories.is_match());
    }
}
