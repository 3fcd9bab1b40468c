//! Product grid rendering for list and search output
//!
//! Every list-like command hands its rows to [`render_products`] so the grid
//! looks the same whichever command produced it. CSV, TSV and ID output stay
//! single-line per product for piping.

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style, Table};

use crate::cli::helpers::{format_price, truncate_str};
use crate::cli::OutputFormat;
use crate::core::Product;

const HEADERS: [&str; 5] = ["ID", "Name", "Category", "Price", "Quantity"];

/// Widest name or category shown in the boxed grid
const MAX_TEXT_WIDTH: usize = 40;

/// Render rows in the requested format. `Auto` is the boxed grid.
pub fn render_products(products: &[Product], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Auto => Ok(format!("{}\n", grid(products, true).with(Style::modern()))),
        OutputFormat::Md => Ok(format!("{}\n", grid(products, false).with(Style::markdown()))),
        OutputFormat::Tsv => Ok(tsv(products)),
        OutputFormat::Csv => to_csv(products),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(products).into_diagnostic()?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => serde_yml::to_string(&products).into_diagnostic(),
        OutputFormat::Id => Ok(products.iter().map(|p| format!("{}\n", p.id)).collect()),
    }
}

/// Render a single product; `Auto` is YAML, like a detail view
pub fn render_product(product: &Product, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Auto | OutputFormat::Yaml => serde_yml::to_string(product).into_diagnostic(),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(product).into_diagnostic()?;
            out.push('\n');
            Ok(out)
        }
        other => render_products(std::slice::from_ref(product), other),
    }
}

fn grid(products: &[Product], truncate: bool) -> Table {
    let mut builder = Builder::default();
    builder.push_record(HEADERS);

    for p in products {
        let (name, category) = if truncate {
            (
                truncate_str(&p.name, MAX_TEXT_WIDTH),
                truncate_str(&p.category, MAX_TEXT_WIDTH),
            )
        } else {
            (p.name.clone(), p.category.clone())
        };
        builder.push_record([
            p.id.to_string(),
            name,
            category,
            format_price(p.price),
            p.quantity.to_string(),
        ]);
    }

    builder.build()
}

fn tsv(products: &[Product]) -> String {
    let mut out = String::from("id\tname\tcategory\tprice\tquantity\n");
    for p in products {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            p.id,
            tsv_field(&p.name),
            tsv_field(&p.category),
            format_price(p.price),
            p.quantity
        ));
    }
    out
}

/// Tabs and line breaks would split the row, so they become spaces
fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

/// CSV with an `id,name,category,price,quantity` header, also used by export
pub fn to_csv(products: &[Product]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    if products.is_empty() {
        wtr.write_record(["id", "name", "category", "price", "quantity"])
            .into_diagnostic()?;
    }
    for p in products {
        wtr.serialize(p).into_diagnostic()?;
    }
    let bytes = wtr.into_inner().into_diagnostic()?;
    String::from_utf8(bytes).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Brake Pad".to_string(),
                category: "Brakes".to_string(),
                price: 25.5,
                quantity: 4,
            },
            Product {
                id: 2,
                name: "Oil Filter, long".to_string(),
                category: "Filters".to_string(),
                price: 9.99,
                quantity: 10,
            },
        ]
    }

    #[test]
    fn test_grid_contains_headers_and_rows() {
        let out = render_products(&sample(), OutputFormat::Auto).unwrap();
        assert!(out.contains("Category"));
        assert!(out.contains("Brake Pad"));
        assert!(out.contains("25.50"));
    }

    #[test]
    fn test_markdown_grid() {
        let out = render_products(&sample(), OutputFormat::Md).unwrap();
        assert!(out.lines().next().unwrap().starts_with("| ID"));
        assert!(out.contains("| Oil Filter, long"));
    }

    #[test]
    fn test_tsv() {
        let out = render_products(&sample(), OutputFormat::Tsv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id\tname\tcategory\tprice\tquantity");
        assert_eq!(lines[1], "1\tBrake Pad\tBrakes\t25.50\t4");
    }

    #[test]
    fn test_tsv_keeps_one_row_per_line() {
        let mut products = sample();
        products[0].name = "Brake\nPad".to_string();
        products[1].category = "Fil\tters\r\n".to_string();

        let out = render_products(&products, OutputFormat::Tsv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1\tBrake Pad\tBrakes\t25.50\t4");
        assert_eq!(lines[2], "2\tOil Filter, long\tFil ters  \t9.99\t10");
    }

    #[test]
    fn test_yaml_list() {
        let out = render_products(&sample(), OutputFormat::Yaml).unwrap();
        assert!(out.contains("- id: 1"));
        assert!(out.contains("Oil Filter, long"));
    }

    #[test]
    fn test_csv_quotes_commas() {
        let out = to_csv(&sample()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id,name,category,price,quantity");
        assert_eq!(lines[1], "1,Brake Pad,Brakes,25.5,4");
        assert_eq!(lines[2], "2,\"Oil Filter, long\",Filters,9.99,10");
    }

    #[test]
    fn test_csv_header_when_empty() {
        assert_eq!(to_csv(&[]).unwrap(), "id,name,category,price,quantity\n");
    }

    #[test]
    fn test_ids_and_json() {
        assert_eq!(render_products(&sample(), OutputFormat::Id).unwrap(), "1\n2\n");

        let json = render_products(&sample(), OutputFormat::Json).unwrap();
        let parsed: Vec<Product> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_single_product_defaults_to_yaml() {
        let out = render_product(&sample()[0], OutputFormat::Auto).unwrap();
        assert!(out.contains("name: Brake Pad"));
        assert!(out.contains("quantity: 4"));
    }
}
