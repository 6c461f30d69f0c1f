//! Lookup and catalog subcommands.
//!
//! Handles `mccbook lookup [query]` and `mccbook banks`.

use super::{Context, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::lookup::{self, BankCatalog};
use crate::output::{self, Table};
use clap::Parser;
use console::style;
use std::io::Write;

/// Show bank categories for stored shops.
#[derive(Parser, Debug)]
pub struct LookupCommand {
    /// Shop name fragment or exact MCC
    ///
    /// Digits search by code (a 4-digit code nobody uses still shows its
    /// categories); anything else searches names, ignoring case and spaces.
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl LookupCommand {
    /// Execute the lookup command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let records = ctx.directory()?.list()?;
        let catalog = ctx.catalog()?;
        let format = ctx.format(self.format);

        let hits = lookup::lookup(records, &catalog, &self.query.join(" "));
        let chatty = !ctx.quiet && format == OutputFormat::Plain;

        if chatty && catalog.is_empty() {
            output::print_warning(&format!(
                "no banks in the catalog at {}, add some to see categories",
                ctx.catalog_path().0.display()
            ));
        }

        if chatty && hits.probe {
            output::print_info(&format!(
                "No stored shop uses MCC {}, showing its categories",
                hits.rows[0].mcc
            ));
        }

        output::print_lookup(
            &hits.rows,
            catalog.bank_names(),
            &ctx.settings.no_match_marker,
            format,
        )?;

        Ok(())
    }
}

/// Show the bank catalog.
#[derive(Parser, Debug)]
pub struct BanksCommand {
    /// Only show this bank
    #[arg(value_name = "BANK")]
    pub bank: Option<String>,
}

impl BanksCommand {
    /// Execute the banks command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let catalog = ctx.catalog()?;

        if catalog.is_empty() {
            if !ctx.quiet {
                println!("No banks in the catalog.");
            }
            return Ok(());
        }

        let banks = selected_banks(&catalog, self.bank.as_deref())?;

        let mut stdout = std::io::stdout().lock();
        for bank in banks {
            writeln!(stdout)?;
            writeln!(stdout, "{}", style(bank).cyan().bold())?;

            let table = categories_table(&catalog, bank);
            if table.is_empty() {
                writeln!(stdout, "  {}", style("No categories.").dim())?;
            } else {
                table.write_styled(&mut stdout, false)?;
            }
        }
        writeln!(stdout)?;

        Ok(())
    }
}

/// Names of the banks to show: all of them, or `only` if the catalog has it.
fn selected_banks<'a>(catalog: &'a BankCatalog, only: Option<&str>) -> CliResult<Vec<&'a str>> {
    match only {
        None => Ok(catalog.bank_names().collect()),
        Some(name) => catalog
            .bank_names()
            .find(|bank| *bank == name)
            .map(|bank| vec![bank])
            .ok_or_else(|| CliError::Other(format!("bank '{}' not found in the catalog", name))),
    }
}

/// Categories of one bank with their codes.
fn categories_table(catalog: &BankCatalog, bank: &str) -> Table {
    let mut table = Table::new(vec!["CATEGORY".to_string(), "MCC".to_string()]);

    for category in catalog
        .banks()
        .iter()
        .filter(|b| b.name == bank)
        .flat_map(|b| &b.categories)
    {
        table.push_row(vec![category.name.clone(), category.mcc.join(", ")]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Category;

    #[test]
    fn test_categories_table() {
        let catalog = BankCatalog::default().with_bank(
            "BankA",
            vec![
                Category::new("Dining", &["5812", "5814"]),
                Category::new("Fuel", &["5541"]),
            ],
        );

        let rendered = categories_table(&catalog, "BankA").render(false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "CATEGORY  MCC");
        assert_eq!(lines[2], "Dining    5812, 5814");
        assert_eq!(lines[3], "Fuel      5541");

        assert!(categories_table(&catalog, "Other").is_empty());
    }

    #[test]
    fn test_selected_banks() {
        let catalog = BankCatalog::default()
            .with_bank("BankA", Vec::new())
            .with_bank("BankB", Vec::new());

        assert_eq!(selected_banks(&catalog, None).unwrap(), vec!["BankA", "BankB"]);
        assert_eq!(selected_banks(&catalog, Some("BankB")).unwrap(), vec!["BankB"]);
        assert!(matches!(
            selected_banks(&catalog, Some("BankC")),
            Err(CliError::Other(_))
        ));
    }
}
