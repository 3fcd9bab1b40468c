//! Database schema initialization

use tracing::debug;

use super::InventoryStore;
use crate::core::error::StoreResult;

impl InventoryStore {
    /// Create the products table if it does not exist yet
    pub fn initialize(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                price REAL NOT NULL,
                quantity INTEGER NOT NULL
            );
            "#,
        )?;
        debug!(path = %self.db_path.display(), "schema ready");
        Ok(())
    }
}
