//! `autoshop export` command - Dump all products
//!
//! Writes CSV by default; `-f json` and `-f yaml` are honored. The CSV
//! output can be fed straight back into `autoshop import`.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{open_store, write_output};
use crate::cli::table::{render_products, to_csv};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let products = store.list()?;

    let content = match global.effective_format(&config) {
        f @ (OutputFormat::Json | OutputFormat::Yaml) => render_products(&products, f)?,
        _ => to_csv(&products)?,
    };

    write_output(&content, args.output.as_deref())?;

    if let Some(path) = &args.output {
        if !global.quiet {
            println!(
                "{} Exported {} product(s) to {}",
                style("✓").green(),
                products.len(),
                style(path.display()).cyan()
            );
        }
    }
    Ok(())
}
