//! Shop list subcommands.
//!
//! Handles `mccbook add`, `list`, `delete` and `clear`.

use super::{Context, OutputFormat};
use crate::error::{CliResult, ShopError};
use crate::output;
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Add a shop.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// Shop name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Merchant category code
    #[arg(value_name = "MCC")]
    pub mcc: String,

    /// Code used for МИР card payments, if different
    #[arg(long, value_name = "MCC")]
    pub mir: Option<String>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let directory = ctx.directory()?;
        let record = directory.add(&self.name, &self.mcc, self.mir.as_deref())?;

        if !ctx.quiet {
            output::print_success(&format!(
                "Added '{}' ({}) as {}",
                record.name,
                record.display_codes(),
                record.id.short()
            ));
        }

        Ok(())
    }
}

/// List stored shops.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let records = ctx.directory()?.list()?;
        output::print_shops(&records, ctx.format(self.format))?;
        Ok(())
    }
}

/// Delete a shop.
#[derive(Parser, Debug)]
pub struct DeleteCommand {
    /// Shop ID or prefix
    ///
    /// Can be a full UUID or the first few characters shown by `list`.
    #[arg(value_name = "ID")]
    pub id: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let removed = ctx.directory()?.delete(&self.id)?;

        if !ctx.quiet {
            output::print_success(&format!(
                "Deleted '{}' ({})",
                removed.name,
                removed.display_codes()
            ));
        }

        Ok(())
    }
}

/// Delete every stored shop.
#[derive(Parser, Debug)]
pub struct ClearCommand {
    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl ClearCommand {
    /// Execute the clear command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let directory = ctx.directory()?;
        let count = directory.count()?;

        if count == 0 {
            return Err(ShopError::NothingToDelete.into());
        }

        if ctx.settings.confirm_clear && !self.yes {
            let stdin = io::stdin();
            let prompt = format!("Delete all {} shop(s)? [y/N] ", count);
            if !confirm(&prompt, &mut stdin.lock(), &mut io::stdout())? {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let removed = directory.clear()?;

        if !ctx.quiet {
            output::print_success(&format!("Deleted {} shop(s)", removed));
        }

        Ok(())
    }
}

/// Ask a yes/no question; anything but `y` is a no.
fn confirm(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
