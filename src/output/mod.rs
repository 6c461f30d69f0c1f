//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of the shop
//! list and lookup tables.

mod csv_format;
mod json_format;
mod plain;

pub use json_format::print_json;
pub use plain::{
    lookup_table, print_error, print_info, print_success, print_warning, shops_table, Table,
};

use crate::cli::OutputFormat;
use crate::lookup::LookupRow;
use crate::types::ShopRecord;
use std::io;

/// Print the stored shops in the requested format.
pub fn print_shops(records: &[ShopRecord], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_shops(records),
        OutputFormat::Json => json_format::print_json(records),
        OutputFormat::Csv => csv_format::print_shops(records),
    }
}

/// Print lookup rows in the requested format.
pub fn print_lookup<'a>(
    rows: &[LookupRow],
    banks: impl Iterator<Item = &'a str>,
    no_match_marker: &str,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_lookup(rows, banks, no_match_marker),
        OutputFormat::Json => json_format::print_json(rows),
        OutputFormat::Csv => csv_format::print_lookup(rows, banks, no_match_marker),
    }
}
