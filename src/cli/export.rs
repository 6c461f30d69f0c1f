//! Export subcommand implementation.
//!
//! Handles `mccbook export`, writing the whole shop list as JSON.

use super::Context;
use crate::error::CliResult;
use crate::output;
use clap::Parser;
use std::path::PathBuf;

/// Export all shops.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Output file path (defaults to shops.json in the current directory)
    #[arg(short = 'o', long = "output", conflicts_with = "stdout")]
    pub output_file: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl ExportCommand {
    /// Execute the export command.
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let directory = ctx.directory()?;

        if self.stdout {
            println!("{}", directory.export_json()?);
            return Ok(());
        }

        let path = self
            .output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&ctx.settings.export_file_name));
        let count = directory.export_file(&path).await?;

        if !ctx.quiet {
            output::print_success(&format!("Exported {} shop(s) to {}", count, path.display()));
        }

        Ok(())
    }
}
