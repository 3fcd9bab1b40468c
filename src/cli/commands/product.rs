//! `autoshop product` command - Product management

use clap::Subcommand;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use miette::{IntoDiagnostic, Result};
use std::io::IsTerminal;

use crate::cli::helpers::{format_price, open_store};
use crate::cli::table::{render_product, render_products};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, ProductForm};

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Add a new product
    Add(AddArgs),

    /// Replace the fields of an existing product
    Edit(EditArgs),

    /// Delete a product
    Delete(DeleteArgs),

    /// Show one product
    Show(ShowArgs),

    /// List all products
    List(ListArgs),
}

/// Product fields as typed by the user; numbers stay raw until validation
#[derive(clap::Args, Debug, Default)]
pub struct FieldArgs {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// Category (e.g. Brakes, Filters)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Unit price
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Quantity in stock
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    pub quantity: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Never prompt for missing fields
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Product ID
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Product ID
    pub id: Option<i64>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Product ID
    pub id: i64,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(cmd: ProductCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProductCommands::Add(args) => run_add(args, global),
        ProductCommands::Edit(args) => run_edit(args, global),
        ProductCommands::Delete(args) => run_delete(args, global),
        ProductCommands::Show(args) => run_show(args, global),
        ProductCommands::List(args) => run_list(args, global),
    }
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let interactive = !args.no_prompt && std::io::stdin().is_terminal();
    let fields = args.fields;
    let form = ProductForm {
        name: field_or_prompt(fields.name, "Name", interactive)?,
        category: field_or_prompt(fields.category, "Category", interactive)?,
        price: field_or_prompt(fields.price, "Price", interactive)?,
        quantity: field_or_prompt(fields.quantity, "Quantity", interactive)?,
    };

    let id = store.create(&form)?;

    if global.effective_format(&config) == OutputFormat::Id {
        println!("{}", id);
    } else if !global.quiet {
        println!(
            "{} Added product {} {}",
            style("✓").green(),
            style(id).cyan(),
            style(&form.name).yellow()
        );
    }
    Ok(())
}

/// Use the flag value, or ask for it when running interactively
fn field_or_prompt(value: Option<String>, label: &str, interactive: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if interactive => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .into_diagnostic(),
        None => Ok(String::new()),
    }
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let current = store.get(args.id)?;
    let mut form = ProductForm::from_product(&current);
    let fields = args.fields;
    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(category) = fields.category {
        form.category = category;
    }
    if let Some(price) = fields.price {
        form.price = price;
    }
    if let Some(quantity) = fields.quantity {
        form.quantity = quantity;
    }

    store.update(args.id, &form)?;

    if !global.quiet {
        println!(
            "{} Updated product {} {}",
            style("✓").green(),
            style(args.id).cyan(),
            style(&form.name).yellow()
        );
    }
    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let id = match args.id {
        Some(id) => id,
        None => return Ok(store.delete_selected(None)?),
    };

    let product = store.get(id)?;

    if !args.yes && !global.quiet && std::io::stdin().is_terminal() {
        let prompt = format!(
            "Delete product {} '{}' ({} at {})?",
            product.id,
            product.name,
            product.quantity,
            format_price(product.price)
        );
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.delete(id)?;

    if !global.quiet {
        println!(
            "{} Deleted product {} {}",
            style("✓").green(),
            style(id).cyan(),
            style(&product.name).yellow()
        );
    }
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let product = store.get(args.id)?;
    print!("{}", render_product(&product, global.effective_format(&config))?);
    Ok(())
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    if args.count {
        println!("{}", store.count()?);
        return Ok(());
    }

    let products = store.list()?;
    let format = global.effective_format(&config);

    if products.is_empty() && format == OutputFormat::Auto {
        if !global.quiet {
            println!("No products found.");
        }
        return Ok(());
    }

    print!("{}", render_products(&products, format)?);
    if format == OutputFormat::Auto && !global.quiet {
        println!("{} product(s) found", style(products.len()).cyan());
    }
    Ok(())
}
