//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `mccbook add|list|delete|clear` - Manage the shop list
//! - `mccbook import <file>` / `mccbook export` - Move shops in and out
//! - `mccbook lookup [query]` - Cross-reference shops with bank categories
//! - `mccbook banks` - Show the bank catalog

mod export;
mod import;
mod lookup;
mod shops;

pub use export::ExportCommand;
pub use import::ImportCommand;
pub use lookup::{BanksCommand, LookupCommand};
pub use shops::{AddCommand, ClearCommand, DeleteCommand, ListCommand};

use crate::config::{AppSettings, Paths};
use crate::directory::Directory;
use crate::error::{CliError, CliResult, ShopError};
use crate::lookup::BankCatalog;
use crate::output;
use crate::storage::JsonFileStore;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// mccbook - A shop directory for cashback categories.
///
/// Keeps a list of shops with their merchant category codes and shows,
/// for every bank in the catalog, which cashback category each shop
/// falls into.
#[derive(Parser, Debug)]
#[command(name = "mccbook")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find which cashback category a shop falls into", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Shop store file to use instead of the default
    #[arg(long, global = true, value_name = "PATH", env = "MCCBOOK_STORE")]
    pub store: Option<PathBuf>,

    /// Bank catalog file to use instead of the default
    #[arg(long, global = true, value_name = "PATH", env = "MCCBOOK_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a shop
    #[command(alias = "a")]
    Add(AddCommand),

    /// List stored shops
    #[command(alias = "ls")]
    List(ListCommand),

    /// Delete a shop by id
    #[command(alias = "rm")]
    Delete(DeleteCommand),

    /// Delete every stored shop
    Clear(ClearCommand),

    /// Import shops from a JSON file
    #[command(alias = "i")]
    Import(ImportCommand),

    /// Export all shops to a JSON file
    #[command(alias = "e")]
    Export(ExportCommand),

    /// Show bank categories for stored shops
    #[command(alias = "l", alias = "search")]
    Lookup(LookupCommand),

    /// Show the bank catalog
    #[command(alias = "b")]
    Banks(BanksCommand),
}

impl Commands {
    /// Run the selected subcommand.
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        match self {
            Self::Add(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Clear(cmd) => cmd.execute(ctx),
            Self::Import(cmd) => cmd.execute(ctx).await,
            Self::Export(cmd) => cmd.execute(ctx).await,
            Self::Lookup(cmd) => cmd.execute(ctx),
            Self::Banks(cmd) => cmd.execute(ctx),
        }
    }
}

/// Output format for tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Everything a command needs, resolved from flags and settings.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: AppSettings,
    pub paths: Paths,
    pub store_path: PathBuf,
    catalog_override: Option<PathBuf>,
    pub quiet: bool,
}

impl Context {
    /// Resolve paths and settings for `cli`.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let paths = Paths::discover()?;
        Self::with_paths(cli, paths)
    }

    /// Resolve settings against explicit `paths`.
    pub fn with_paths(cli: &Cli, paths: Paths) -> CliResult<Self> {
        let settings = match &cli.config {
            Some(file) => AppSettings::load_from(file)?,
            None => AppSettings::load(&paths)?,
        };

        let store_path = cli
            .store
            .clone()
            .unwrap_or_else(|| settings.store_path(&paths));
        debug!(store = %store_path.display(), "resolved shop store");

        Ok(Self {
            settings,
            paths,
            store_path,
            catalog_override: cli.catalog.clone(),
            quiet: cli.quiet,
        })
    }

    /// Open the shop directory.
    pub fn directory(&self) -> CliResult<Directory<JsonFileStore>> {
        Ok(Directory::new(JsonFileStore::new(&self.store_path)?))
    }

    /// Where the bank catalog is read from, and whether it was named explicitly.
    pub fn catalog_path(&self) -> (PathBuf, bool) {
        match &self.catalog_override {
            Some(path) => (path.clone(), true),
            None => self.settings.catalog_path(&self.paths),
        }
    }

    /// Load the bank catalog.
    ///
    /// A catalog named on the command line or in settings must exist; the
    /// default location may be missing.
    pub fn catalog(&self) -> CliResult<BankCatalog> {
        let catalog = match self.catalog_path() {
            (path, true) => BankCatalog::load(&path)?,
            (path, false) => BankCatalog::load_or_empty(&path)?,
        };
        Ok(catalog)
    }

    /// The explicit format, else the configured default.
    pub fn format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.unwrap_or(self.settings.default_format)
    }
}

/// Print a failed command's error, with per-record details for imports.
pub fn report_error(err: &anyhow::Error) {
    output::print_error(&format!("{:#}", err));

    let invalid = err.chain().find_map(|cause| match cause.downcast_ref::<CliError>() {
        Some(CliError::Shop(ShopError::InvalidRecords(issues))) => Some(issues),
        _ => None,
    });

    if let Some(issues) = invalid {
        for issue in issues {
            eprintln!("  {}", issue);
        }
    }
}
