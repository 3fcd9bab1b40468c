//! `autoshop init` command - Create the inventory database

use console::style;
use miette::Result;

use crate::cli::helpers::open_store;
use crate::cli::GlobalOpts;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct InitArgs {}

pub fn run(_args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let existed = config.database_path(global.db.as_deref()).exists();
    let store = open_store(global, &config)?;

    if global.quiet {
        return Ok(());
    }

    if existed {
        println!(
            "{} Inventory already initialized at {} ({} product(s))",
            style("•").dim(),
            style(store.path().display()).cyan(),
            store.count()?
        );
    } else {
        println!(
            "{} Initialized inventory at {}",
            style("✓").green(),
            style(store.path().display()).cyan()
        );
        println!();
        println!("Next steps:");
        println!("  {} Add your first product", style("autoshop product add").yellow());
        println!("  {} List all products", style("autoshop product list").yellow());
    }

    Ok(())
}
