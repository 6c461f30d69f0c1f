//! Import subcommand implementation.
//!
//! Handles `mccbook import <file>`, merging shops from a JSON export.

use super::Context;
use crate::error::CliResult;
use crate::output;
use clap::Parser;
use std::path::PathBuf;

/// Import shops from a JSON file.
#[derive(Parser, Debug)]
pub struct ImportCommand {
    /// JSON file with an array of `{ "name", "mcc", "mccMir"? }` objects
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ImportCommand {
    /// Execute the import command.
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let directory = ctx.directory()?;
        let summary = directory.import_file(&self.file).await?;

        if !ctx.quiet {
            output::print_success(&format!(
                "Imported {} shop(s) from {}",
                summary.added,
                self.file.display()
            ));
            if summary.skipped > 0 {
                output::print_info(&format!(
                    "Skipped {} shop(s) already in the list",
                    summary.skipped
                ));
            }
        }

        Ok(())
    }
}
