//! `autoshop config` command - Configuration management
//!
//! Settings live in the global (user) config file. The database path can
//! also come from `--db` or `AUTOSHOP_DB`, which take precedence.

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

const KEYS: [(&str, &str); 2] = [
    ("database", "Path of the SQLite inventory file"),
    ("default_format", "Output format used when -f is not given"),
];

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show,

    /// Set a configuration value
    Set(SetArgs),

    /// Unset (remove) a configuration value
    Unset(UnsetArgs),

    /// Show the path of the configuration file
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration key (database, default_format)
    pub key: String,

    /// Value to set
    pub value: String,
}

#[derive(clap::Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key to remove
    pub key: String,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Set(args) => run_set(args),
        ConfigCommands::Unset(args) => run_unset(args),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let db = config.database_path(global.db.as_deref());

    println!("{}", style("Effective configuration:").bold());
    println!("  {} {}", style("database:").cyan(), db.display());
    println!(
        "  {} {}",
        style("default_format:").cyan(),
        config.default_format.as_deref().unwrap_or("auto")
    );
    Ok(())
}

fn global_config_path() -> Result<PathBuf> {
    Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine the user config directory"))
}

fn run_set(args: SetArgs) -> Result<()> {
    let path = global_config_path()?;
    let mut config = Config::read_file(&path).unwrap_or_default();

    match args.key.as_str() {
        "database" => config.database = Some(PathBuf::from(&args.value)),
        "default_format" => {
            OutputFormat::from_str(&args.value, true)
                .map_err(|_| miette::miette!("Unknown output format '{}'", args.value))?;
            config.default_format = Some(args.value.to_lowercase());
        }
        other => return Err(unknown_key(other)),
    }

    write_config(&config, &path)?;
    println!(
        "{} Set {} {} {}",
        style("✓").green(),
        style(&args.key).cyan(),
        style("→").dim(),
        style(&args.value).yellow()
    );
    Ok(())
}

fn run_unset(args: UnsetArgs) -> Result<()> {
    let path = global_config_path()?;
    if !path.exists() {
        return Err(miette::miette!(
            "Config file does not exist: {}",
            path.display()
        ));
    }
    let mut config = Config::read_file(&path).unwrap_or_default();

    match args.key.as_str() {
        "database" => config.database = None,
        "default_format" => config.default_format = None,
        other => return Err(unknown_key(other)),
    }

    write_config(&config, &path)?;
    println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
    Ok(())
}

fn write_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    let yaml = serde_yml::to_string(config).into_diagnostic()?;
    fs::write(path, yaml).into_diagnostic()
}

fn unknown_key(key: &str) -> miette::Report {
    miette::miette!(
        help = "run `autoshop config keys` to list valid keys",
        "Unknown config key '{}'",
        key
    )
}

fn run_path() -> Result<()> {
    let path = global_config_path()?;
    println!("{}", path.display());
    Ok(())
}

fn run_keys() -> Result<()> {
    println!("{}", style("Available configuration keys:").bold());
    for (key, description) in KEYS {
        println!("  {:<16} {}", style(key).cyan(), description);
    }
    Ok(())
}
