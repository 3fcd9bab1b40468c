//! SQLite-backed inventory store
//!
//! The store owns nothing but the path to the database file. Every operation
//! opens its own connection, runs, and drops it; no connection or
//! transaction outlives a call.
//!
//! Validation always happens before the database is touched, so a rejected
//! create, update or search leaves the table exactly as it was.

mod queries;
mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::core::error::{StoreError, StoreResult, ValidationError};
use crate::core::product::{ProductFields, ProductForm};

/// Default database file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "autoshop.db";

/// Persistence and query layer for the `products` table
#[derive(Debug, Clone)]
pub struct InventoryStore {
    db_path: PathBuf,
}

/// Outcome of a bulk import
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Rows that passed validation
    pub accepted: usize,
    /// Ids assigned to inserted rows (empty for a dry run or a rejected batch)
    pub inserted: Vec<i64>,
    /// Zero-based input index and reason for every rejected row
    pub rejected: Vec<(usize, ValidationError)>,
}

impl InventoryStore {
    /// Open the store at `path`, creating the file and table if absent
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db_path = path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let store = Self { db_path };
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> StoreResult<Connection> {
        debug!(path = %self.db_path.display(), "opening connection");
        Ok(Connection::open(&self.db_path)?)
    }

    /// Validate a form and insert it, returning the new id
    pub fn create(&self, form: &ProductForm) -> StoreResult<i64> {
        let fields = form.validate()?;
        self.insert(&fields)
    }

    /// Insert already-validated fields
    pub fn insert(&self, fields: &ProductFields) -> StoreResult<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO products (name, category, price, quantity) VALUES (?1, ?2, ?3, ?4)",
            params![fields.name, fields.category, fields.price, fields.quantity],
        )?;
        let id = conn.last_insert_rowid();
        info!(id, name = %fields.name, "product created");
        Ok(id)
    }

    /// Replace every mutable field of product `id`
    pub fn update(&self, id: i64, form: &ProductForm) -> StoreResult<()> {
        let fields = form.validate()?;

        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE products SET name = ?1, category = ?2, price = ?3, quantity = ?4 WHERE id = ?5",
            params![fields.name, fields.category, fields.price, fields.quantity, id],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound { id });
        }
        info!(id, "product updated");
        Ok(())
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;

        if changed == 0 {
            return Err(StoreError::NotFound { id });
        }
        info!(id, "product deleted");
        Ok(())
    }

    /// Delete the selected product; `None` means nothing was selected
    pub fn delete_selected(&self, selection: Option<i64>) -> StoreResult<()> {
        match selection {
            Some(id) => self.delete(id),
            None => Err(StoreError::NoSelection),
        }
    }

    /// Validate and insert a batch of forms in one transaction.
    ///
    /// Unless `skip_errors` is set, a single invalid row rejects the whole
    /// batch and nothing is written. With `dry_run` nothing is written either
    /// way.
    pub fn import(
        &self,
        forms: &[ProductForm],
        skip_errors: bool,
        dry_run: bool,
    ) -> StoreResult<ImportReport> {
        let mut report = ImportReport::default();
        let mut valid = Vec::with_capacity(forms.len());

        for (idx, form) in forms.iter().enumerate() {
            match form.validate() {
                Ok(fields) => valid.push(fields),
                Err(e) => report.rejected.push((idx, e)),
            }
        }
        report.accepted = valid.len();

        if dry_run || (!skip_errors && !report.rejected.is_empty()) {
            debug!(
                accepted = report.accepted,
                rejected = report.rejected.len(),
                dry_run,
                "import not written"
            );
            return Ok(report);
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO products (name, category, price, quantity) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for fields in &valid {
                stmt.execute(params![
                    fields.name,
                    fields.category,
                    fields.price,
                    fields.quantity
                ])?;
                report.inserted.push(tx.last_insert_rowid());
            }
        }
        tx.commit()?;

        info!(count = report.inserted.len(), "products imported");
        Ok(report)
    }
}
