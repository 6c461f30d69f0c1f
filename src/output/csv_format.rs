//! CSV output formatting.

use crate::lookup::{LookupCell, LookupRow};
use crate::types::ShopRecord;
use std::io::{self, Write};

/// Separator between several categories in one CSV cell.
const CATEGORY_SEPARATOR: &str = "; ";

/// Write the shop list as CSV.
pub fn write_shops<W: Write>(writer: W, records: &[ShopRecord]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["id", "name", "mcc", "mcc_mir", "added_at"])?;

    for record in records {
        wtr.write_record([
            record.id.to_string().as_str(),
            record.name.as_str(),
            record.mcc.as_str(),
            record.mcc_mir.as_deref().unwrap_or(""),
            record.added_at.to_rfc3339().as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write lookup rows as CSV, one column per bank.
pub fn write_lookup<'a, W: Write>(
    writer: W,
    rows: &[LookupRow],
    banks: impl Iterator<Item = &'a str>,
    no_match_marker: &str,
) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["name".to_string(), "mcc".to_string(), "mcc_mir".to_string()];
    header.extend(banks.map(str::to_string));
    wtr.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.name.clone(),
            row.mcc.clone(),
            row.mcc_mir.clone().unwrap_or_default(),
        ];
        record.extend(row.banks.iter().map(|cell| match &cell.categories {
            LookupCell::NoMatch => no_match_marker.to_string(),
            LookupCell::Matches(names) => names.join(CATEGORY_SEPARATOR),
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print the shop list as CSV.
pub fn print_shops(records: &[ShopRecord]) -> io::Result<()> {
    write_shops(io::stdout().lock(), records)
}

/// Print lookup rows as CSV.
pub fn print_lookup<'a>(
    rows: &[LookupRow],
    banks: impl Iterator<Item = &'a str>,
    no_match_marker: &str,
) -> io::Result<()> {
    write_lookup(io::stdout().lock(), rows, banks, no_match_marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{lookup_rows, BankCatalog, Category};

    #[test]
    fn test_lookup_csv() {
        let catalog = BankCatalog::default()
            .with_bank(
                "BankA",
                vec![
                    Category::new("Dining", &["5812"]),
                    Category::new("Treats", &["5814"]),
                ],
            )
            .with_bank("BankB", vec![]);
        let shops =
            vec![ShopRecord::new("Cafe, X", "5812").with_mir(Some("5814".to_string()))];
        let rows = lookup_rows(&shops, &catalog);

        let mut buf = Vec::new();
        write_lookup(&mut buf, &rows, catalog.bank_names(), "✘").unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "name,mcc,mcc_mir,BankA,BankB\n\"Cafe, X\",5812,5814,Dining; Treats,✘\n"
        );
    }

    #[test]
    fn test_shops_csv_header() {
        let mut buf = Vec::new();
        write_shops(&mut buf, &[ShopRecord::new("Cafe X", "5812")]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,name,mcc,mcc_mir,added_at"));
        assert!(lines.next().unwrap().contains(",Cafe X,5812,,"));
    }
}
