//! `autoshop status` command - Inventory summary

use console::style;
use miette::{IntoDiagnostic, Result};
use std::collections::BTreeSet;

use crate::cli::helpers::{format_price, open_store};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Product};

#[derive(clap::Args, Debug)]
pub struct StatusArgs {}

/// Aggregate figures over the whole table
#[derive(Debug, Default, PartialEq, serde::Serialize)]
pub struct StockSummary {
    pub products: usize,
    pub categories: usize,
    /// Widened so summing any number of `i64` quantities cannot overflow
    pub units: i128,
    pub stock_value: f64,
    pub out_of_stock: usize,
}

impl StockSummary {
    pub fn from_products(products: &[Product]) -> Self {
        let categories: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();
        Self {
            products: products.len(),
            categories: categories.len(),
            units: products.iter().map(|p| i128::from(p.quantity)).sum(),
            stock_value: products.iter().map(|p| p.price * p.quantity as f64).sum(),
            out_of_stock: products.iter().filter(|p| p.quantity <= 0).count(),
        }
    }
}

#[derive(serde::Serialize)]
struct StatusReport<'a> {
    database: String,
    summary: &'a StockSummary,
}

pub fn run(_args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let summary = StockSummary::from_products(&store.list()?);

    if global.effective_format(&config) == OutputFormat::Json {
        let report = StatusReport {
            database: store.path().display().to_string(),
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        return Ok(());
    }

    println!("{}", style("Inventory Status").bold());
    println!("  Database:         {}", style(store.path().display()).cyan());
    println!("  Products:         {}", style(summary.products).cyan());
    println!("  Categories:       {}", summary.categories);
    println!("  Units in stock:   {}", summary.units);
    println!("  Stock value:      {}", format_price(summary.stock_value));
    if summary.out_of_stock > 0 {
        println!("  Out of stock:     {}", style(summary.out_of_stock).yellow());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InventoryStore, ProductForm};

    #[test]
    fn test_summary() {
        let products = vec![
            Product {
                id: 1,
                name: "Brake Pad".to_string(),
                category: "Brakes".to_string(),
                price: 25.5,
                quantity: 4,
            },
            Product {
                id: 2,
                name: "Brake Disc".to_string(),
                category: "Brakes".to_string(),
                price: 40.0,
                quantity: 0,
            },
            Product {
                id: 3,
                name: "Oil Filter".to_string(),
                category: "Filters".to_string(),
                price: 10.0,
                quantity: 10,
            },
        ];
        let summary = StockSummary::from_products(&products);
        assert_eq!(summary.products, 3);
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.units, 14);
        assert_eq!(summary.stock_value, 202.0);
        assert_eq!(summary.out_of_stock, 1);
    }

    #[test]
    fn test_summary_units_beyond_i64() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = InventoryStore::open(tmp.path().join("autoshop.db")).unwrap();
        let max = i64::MAX.to_string();
        store
            .create(&ProductForm::new("Bolt", "Hardware", "0.10", max.as_str()))
            .unwrap();
        store
            .create(&ProductForm::new("Nut", "Hardware", "0.05", "1"))
            .unwrap();

        let summary = StockSummary::from_products(&store.list().unwrap());
        assert_eq!(summary.units, i128::from(i64::MAX) + 1);
        assert_eq!(summary.products, 2);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(StockSummary::from_products(&[]), StockSummary::default());
    }
}
