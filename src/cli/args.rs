//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, config::ConfigCommands, export::ExportArgs,
    import::ImportArgs, init::InitArgs, product::ProductCommands, search::SearchArgs,
    status::StatusArgs,
};
use crate::core::Config;

#[derive(Parser)]
#[command(name = "autoshop")]
#[command(author, version, about = "Auto-parts shop inventory")]
#[command(long_about = "Manage an auto-parts shop's product inventory stored in a local SQLite file.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Database file (default: $AUTOSHOP_DB, then config, then ./autoshop.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

impl GlobalOpts {
    /// Output format after applying the configured default to `auto`
    pub fn effective_format(&self, config: &Config) -> OutputFormat {
        if self.format != OutputFormat::Auto {
            return self.format;
        }
        config
            .default_format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f, true).ok())
            .unwrap_or(OutputFormat::Auto)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the inventory database if it does not exist
    Init(InitArgs),

    /// Add, edit, delete, show and list products
    #[command(subcommand)]
    Product(ProductCommands),

    /// Search products by name, category and price range
    Search(SearchArgs),

    /// Import products from a CSV file
    Import(ImportArgs),

    /// Export all products as CSV or JSON
    Export(ExportArgs),

    /// Show database location and stock summary
    Status(StatusArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, table for list)
    #[default]
    Auto,
    /// YAML format
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_configured_default_format() {
        let global = GlobalOpts {
            format: OutputFormat::Auto,
            quiet: false,
            verbose: false,
            db: None,
        };
        let config = Config {
            database: None,
            default_format: Some("JSON".to_string()),
        };
        assert_eq!(global.effective_format(&config), OutputFormat::Json);

        let explicit = GlobalOpts {
            format: OutputFormat::Csv,
            ..global.clone()
        };
        assert_eq!(explicit.effective_format(&config), OutputFormat::Csv);

        let bogus = Config {
            database: None,
            default_format: Some("xml".to_string()),
        };
        assert_eq!(global.effective_format(&bogus), OutputFormat::Auto);
    }
}
