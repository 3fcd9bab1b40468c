//! `autoshop search` command - Filter products
//!
//! All given filters are combined with AND. Name and category match
//! anywhere in the field; price bounds are inclusive.

use console::style;
use miette::Result;

use crate::cli::helpers::open_store;
use crate::cli::table::render_products;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, SearchFilters};

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Category contains this text
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Minimum price (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub min_price: Option<String>,

    /// Maximum price (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub max_price: Option<String>,

    /// Case-insensitive text matching
    #[arg(long, short = 'i')]
    pub ignore_case: bool,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

impl SearchArgs {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            name: self.name.clone(),
            category: self.category.clone(),
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            ignore_case: self.ignore_case,
        }
    }
}

/// Run the search command
pub fn run(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let results = store.search(&args.filters())?;

    // Count only
    if args.count {
        println!("{}", results.len());
        return Ok(());
    }

    let format = global.effective_format(&config);

    // No results
    if results.is_empty() && format == OutputFormat::Auto {
        if !global.quiet {
            println!("No products match the given filters.");
        }
        return Ok(());
    }

    print!("{}", render_products(&results, format)?);
    if format == OutputFormat::Auto && !global.quiet {
        println!("{} product(s) found", style(results.len()).cyan());
    }
    Ok(())
}
