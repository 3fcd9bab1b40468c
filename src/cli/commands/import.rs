//! `autoshop import` command - Import products from CSV
//!
//! The file needs `name`, `category`, `price` and `quantity` columns
//! (header names are case-insensitive, order is free). Any `id` column is
//! ignored; the store always assigns ids.

use console::style;
use csv::{ReaderBuilder, StringRecord};
use miette::{IntoDiagnostic, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use crate::cli::helpers::open_store;
use crate::cli::GlobalOpts;
use crate::core::{Config, ProductForm};

const REQUIRED_COLUMNS: [&str; 4] = ["name", "category", "price", "quantity"];

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// CSV file to import
    #[arg(required_unless_present = "template")]
    pub file: Option<PathBuf>,

    /// Print a CSV template and exit
    #[arg(long)]
    pub template: bool,

    /// Validate CSV without writing to the database
    #[arg(long)]
    pub dry_run: bool,

    /// Import the valid rows even if some rows are rejected
    #[arg(long)]
    pub skip_errors: bool,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    if args.template {
        println!("{}", REQUIRED_COLUMNS.join(","));
        println!("Brake Pad,Brakes,25.50,4");
        return Ok(());
    }

    let Some(path) = args.file.as_ref() else {
        return Err(miette::miette!("No CSV file given"));
    };

    let file = File::open(path).into_diagnostic()?;
    let forms = read_forms(BufReader::new(file))?;

    let config = Config::load();
    let store = open_store(global, &config)?;
    let report = store.import(&forms, args.skip_errors, args.dry_run)?;

    for (idx, err) in &report.rejected {
        eprintln!("{} Row {}: {}", style("✗").red(), csv_row_number(*idx), err);
    }

    if !global.quiet {
        println!();
        println!("{}", style("Import Summary").bold());
        println!("  Rows processed:   {}", style(forms.len()).cyan());
        if args.dry_run {
            println!("  Would import:     {}", style(report.accepted).green());
        } else {
            println!("  Imported:         {}", style(report.inserted.len()).green());
        }
        if !report.rejected.is_empty() {
            println!("  Errors:           {}", style(report.rejected.len()).red());
        }
    }

    if !report.rejected.is_empty() && !args.skip_errors {
        return Err(miette::miette!(
            help = "fix the rows above or re-run with --skip-errors",
            "{} row(s) rejected; nothing was imported",
            report.rejected.len()
        ));
    }

    Ok(())
}

/// Data rows start on line 2, after the header
fn csv_row_number(idx: usize) -> usize {
    idx + 2
}

/// Parse CSV into raw product forms; validation happens in the store
pub fn read_forms<R: Read>(reader: R) -> Result<Vec<ProductForm>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().into_diagnostic()?.clone();
    let header_map = build_header_map(&headers);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !header_map.contains_key(*c))
        .collect();
    if !missing.is_empty() {
        return Err(miette::miette!(
            help = format!("expected header: {}", REQUIRED_COLUMNS.join(",")),
            "CSV is missing column(s): {}",
            missing.join(", ")
        ));
    }

    let mut forms = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            miette::miette!("CSV parse error at row {}: {}", csv_row_number(idx), e)
        })?;
        forms.push(ProductForm {
            name: get_field(&record, &header_map, "name"),
            category: get_field(&record, &header_map, "category"),
            price: get_field(&record, &header_map, "price"),
            quantity: get_field(&record, &header_map, "quantity"),
        });
    }
    Ok(forms)
}

/// Build a map from header name to column index
fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase().trim().to_string(), i))
        .collect()
}

fn get_field(record: &StringRecord, header_map: &HashMap<String, usize>, field: &str) -> String {
    header_map
        .get(field)
        .and_then(|&idx| record.get(idx))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
