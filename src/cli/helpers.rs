//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cli::GlobalOpts;
use crate::core::{Config, InventoryStore};

/// Resolve the database path and open the store
///
/// Opening creates the products table if needed, so every command works
/// against a fresh database file.
pub fn open_store(global: &GlobalOpts, config: &Config) -> Result<InventoryStore> {
    let path = config.database_path(global.db.as_deref());
    Ok(InventoryStore::open(path)?)
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Counts characters rather than bytes so multi-byte names never split.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a price with two decimals
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Write content to a file or stdout
pub fn write_output(content: &str, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
        }
        None => print!("{}", content),
    }
    Ok(())
}
