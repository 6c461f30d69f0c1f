//! Plain text output formatting.
//!
//! Produces human-readable tables with colors. Column widths use display
//! width, so Cyrillic shop names and the `✘` marker line up.

use crate::lookup::{LookupCell, LookupRow};
use crate::types::ShopRecord;
use console::{measure_text_width, pad_str, style, Alignment};
use std::io::{self, Write};

const COLUMN_GAP: &str = "  ";

/// A text table whose cells may span several lines.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Vec<String>>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Add a row of single-line cells.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells.into_iter().map(|c| vec![c]).collect());
    }

    /// Add a row whose cells may hold several lines each.
    pub fn push_multiline_row(&mut self, cells: Vec<Vec<String>>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| measure_text_width(h)).collect();

        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                let cell_width = cell.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
                match widths.get_mut(col) {
                    Some(w) => *w = (*w).max(cell_width),
                    None => widths.push(cell_width),
                }
            }
        }

        widths
    }

    fn join_line(parts: &[&str], widths: &[usize]) -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let text = parts.get(col).copied().unwrap_or("");
                pad_str(text, *width, Alignment::Left, None).into_owned()
            })
            .collect();

        padded.join(COLUMN_GAP).trim_end().to_string()
    }

    fn header_line(&self, widths: &[usize]) -> String {
        let parts: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        Self::join_line(&parts, widths)
    }

    fn rule(widths: &[usize]) -> String {
        let gaps = COLUMN_GAP.len() * widths.len().saturating_sub(1);
        let total = widths.iter().sum::<usize>() + gaps;
        "─".repeat(total)
    }

    fn row_lines(row: &[Vec<String>], widths: &[usize]) -> Vec<String> {
        let height = row.iter().map(Vec::len).max().unwrap_or(0).max(1);

        (0..height)
            .map(|line| {
                let parts: Vec<&str> = row
                    .iter()
                    .map(|cell| cell.get(line).map(String::as_str).unwrap_or(""))
                    .collect();
                Self::join_line(&parts, widths)
            })
            .collect()
    }

    /// Render without styling.
    pub fn render(&self, separate_rows: bool) -> String {
        let widths = self.widths();
        let mut lines = vec![self.header_line(&widths), Self::rule(&widths)];

        for (i, row) in self.rows.iter().enumerate() {
            if separate_rows && i > 0 {
                lines.push(Self::rule(&widths));
            }
            lines.extend(Self::row_lines(row, &widths));
        }

        lines.join("\n")
    }

    /// Write with a bold header and dim rules.
    pub fn write_styled(&self, out: &mut impl Write, separate_rows: bool) -> io::Result<()> {
        let widths = self.widths();
        let rule = Self::rule(&widths);

        writeln!(out, "  {}", style(self.header_line(&widths)).bold())?;
        writeln!(out, "  {}", style(&rule).dim())?;

        for (i, row) in self.rows.iter().enumerate() {
            if separate_rows && i > 0 {
                writeln!(out, "  {}", style(&rule).dim())?;
            }
            for line in Self::row_lines(row, &widths) {
                writeln!(out, "  {}", line)?;
            }
        }

        Ok(())
    }
}

/// Table of stored shops for the admin view.
pub fn shops_table(records: &[ShopRecord]) -> Table {
    let mut table = Table::new(vec![
        "ID".to_string(),
        "NAME".to_string(),
        "MCC".to_string(),
        "ADDED".to_string(),
    ]);

    for record in records {
        table.push_row(vec![
            record.id.short(),
            record.name.clone(),
            record.display_codes(),
            record.added_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    table
}

/// Table of lookup rows, one column per bank.
pub fn lookup_table<'a>(
    rows: &[LookupRow],
    banks: impl Iterator<Item = &'a str>,
    no_match_marker: &str,
) -> Table {
    let mut headers = vec!["NAME".to_string(), "MCC".to_string()];
    headers.extend(banks.map(str::to_string));
    let mut table = Table::new(headers);

    for row in rows {
        let mut cells = vec![vec![row.name.clone()], vec![row.codes.clone()]];
        cells.extend(row.banks.iter().map(|cell| match &cell.categories {
            LookupCell::NoMatch => vec![no_match_marker.to_string()],
            LookupCell::Matches(names) => names.clone(),
        }));
        table.push_multiline_row(cells);
    }

    table
}

/// Print the admin shop list.
pub fn print_shops(records: &[ShopRecord]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    if records.is_empty() {
        writeln!(out, "  {}", style("No shops stored.").dim())?;
    } else {
        shops_table(records).write_styled(&mut out, false)?;
        writeln!(out)?;
        writeln!(out, "  {} shop(s)", style(records.len()).bold())?;
    }
    writeln!(out)?;

    Ok(())
}

/// Print the lookup table.
pub fn print_lookup<'a>(
    rows: &[LookupRow],
    banks: impl Iterator<Item = &'a str>,
    no_match_marker: &str,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    if rows.is_empty() {
        writeln!(out, "  {}", style("No matching shops.").dim())?;
    } else {
        lookup_table(rows, banks, no_match_marker).write_styled(&mut out, true)?;
    }
    writeln!(out)?;

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{lookup_rows, BankCatalog, Category};

    #[test]
    fn test_table_alignment_uses_display_width() {
        let mut table = Table::new(vec!["NAME".to_string(), "MCC".to_string()]);
        table.push_row(vec!["Аптека".to_string(), "5912".to_string()]);
        table.push_row(vec!["Cafe X".to_string(), "5812".to_string()]);

        let rendered = table.render(false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "NAME    MCC");
        assert_eq!(lines[2], "Аптека  5912");
        assert_eq!(lines[3], "Cafe X  5812");
    }

    #[test]
    fn test_lookup_table_cells() {
        let catalog = BankCatalog::default()
            .with_bank(
                "BankA",
                vec![
                    Category::new("Dining", &["5812"]),
                    Category::new("Treats", &["5812"]),
                ],
            )
            .with_bank("BankB", vec![Category::new("Fuel", &["5541"])]);
        let shops = vec![ShopRecord::new("Cafe X", "5812")];
        let rows = lookup_rows(&shops, &catalog);

        let rendered = lookup_table(&rows, catalog.bank_names(), "✘").render(true);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "NAME    MCC   BankA   BankB");
        assert_eq!(lines[2], "Cafe X  5812  Dining  ✘");
        assert_eq!(lines[3], "              Treats");
    }

    #[test]
    fn test_example_lookup_row() {
        let catalog =
            BankCatalog::default().with_bank("BankA", vec![Category::new("Dining", &["5812"])]);
        let shops = vec![ShopRecord::new("Cafe X", "5812")];
        let rows = lookup_rows(&shops, &catalog);

        let rendered = lookup_table(&rows, catalog.bank_names(), "✘").render(true);
        assert_eq!(rendered.lines().nth(2), Some("Cafe X  5812  Dining"));
    }
}
