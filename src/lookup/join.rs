//! Join of shops against the bank catalog.

use super::catalog::{Bank, BankCatalog, Category};
use crate::types::ShopRecord;
use serde::Serialize;

/// What one bank offers for one shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupCell {
    /// No category of the bank covers the shop's codes.
    NoMatch,
    /// Names of matching categories, in catalog order.
    Matches(Vec<String>),
}

impl LookupCell {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matches(_))
    }
}

/// One bank column of a lookup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankCell {
    pub bank: String,
    pub categories: LookupCell,
}

/// A shop with its match against every bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRow {
    pub name: String,
    pub mcc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc_mir: Option<String>,
    /// Code column text, `mcc` plus the МИР code when present.
    #[serde(skip)]
    pub codes: String,
    pub banks: Vec<BankCell>,
}

/// Categories of `bank` covering any code of `record`.
pub fn matching_categories<'a>(record: &ShopRecord, bank: &'a Bank) -> Vec<&'a Category> {
    bank.categories
        .iter()
        .filter(|category| category.covers(record.codes()))
        .collect()
}

/// Cell for one `(record, bank)` pair.
pub fn lookup_cell(record: &ShopRecord, bank: &Bank) -> LookupCell {
    let names: Vec<String> = matching_categories(record, bank)
        .into_iter()
        .map(|c| c.name.clone())
        .collect();

    if names.is_empty() {
        LookupCell::NoMatch
    } else {
        LookupCell::Matches(names)
    }
}

/// Row for one record, one cell per bank in catalog order.
pub fn lookup_row(record: &ShopRecord, catalog: &BankCatalog) -> LookupRow {
    LookupRow {
        name: record.name.clone(),
        mcc: record.mcc.clone(),
        mcc_mir: record.mcc_mir.clone(),
        codes: record.display_codes(),
        banks: catalog
            .banks()
            .iter()
            .map(|bank| BankCell {
                bank: bank.name.clone(),
                categories: lookup_cell(record, bank),
            })
            .collect(),
    }
}

/// Rows for all records, in record order.
pub fn lookup_rows(records: &[ShopRecord], catalog: &BankCatalog) -> Vec<LookupRow> {
    records.iter().map(|r| lookup_row(r, catalog)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BankCatalog {
        BankCatalog::default()
            .with_bank(
                "BankA",
                vec![
                    Category::new("Dining", &["5812", "5814"]),
                    Category::new("Fast food", &["5814"]),
                ],
            )
            .with_bank("BankB", vec![Category::new("Pharmacy", &["5912"])])
            .with_bank("BankC", vec![Category::new("Groceries", &["5411"])])
    }

    #[test]
    fn test_single_match_renders_category_and_no_match_elsewhere() {
        let shop = ShopRecord::new("Cafe X", "5812");
        let row = lookup_row(&shop, &catalog());

        assert_eq!(row.name, "Cafe X");
        assert_eq!(row.codes, "5812");
        assert_eq!(
            row.banks[0].categories,
            LookupCell::Matches(vec!["Dining".to_string()])
        );
        assert_eq!(row.banks[1].categories, LookupCell::NoMatch);
        assert_eq!(row.banks[2].categories, LookupCell::NoMatch);
    }

    #[test]
    fn test_multiple_matches_keep_catalog_order() {
        let shop = ShopRecord::new("Burger", "5814");
        let row = lookup_row(&shop, &catalog());
        assert_eq!(
            row.banks[0].categories,
            LookupCell::Matches(vec!["Dining".to_string(), "Fast food".to_string()])
        );
    }

    #[test]
    fn test_mir_code_joins_too() {
        let shop = ShopRecord::new("Pharmacy", "5122").with_mir(Some("5912".to_string()));
        let row = lookup_row(&shop, &catalog());
        assert!(row.banks[1].categories.is_match());
        assert_eq!(row.codes, "5122 (5912 МИР)");
    }

    #[test]
    fn test_rows_follow_record_order() {
        let shops = vec![
            ShopRecord::new("B", "5411"),
            ShopRecord::new("A", "5812"),
        ];
        let rows = lookup_rows(&shops, &catalog());
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_row_serialization() {
        let shop = ShopRecord::new("Cafe X", "5812");
        let json = serde_json::to_value(lookup_row(&shop, &catalog())).unwrap();
        assert_eq!(json["banks"][0]["categories"][0], "Dining");
        assert!(json["banks"][1]["categories"].is_null());
        assert!(json.get("codes").is_none());
    }
}
