//! Read-only queries against the products table

use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use tracing::debug;

use super::InventoryStore;
use crate::core::error::{StoreError, StoreResult};
use crate::core::filter::{CompiledFilter, SearchFilters};
use crate::core::product::Product;

const SELECT_PRODUCTS: &str = "SELECT id, name, category, price, quantity FROM products";

fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        price: row.get(3)?,
        quantity: row.get(4)?,
    })
}

impl InventoryStore {
    /// All products in storage order
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        self.query_compiled(&CompiledFilter::from_predicates(&[]))
    }

    pub fn get(&self, id: i64) -> StoreResult<Product> {
        let conn = self.connect()?;
        conn.query_row(
            &format!("{SELECT_PRODUCTS} WHERE id = ?1"),
            params![id],
            row_to_product,
        )
        .optional()?
        .ok_or(StoreError::NotFound { id })
    }

    pub fn count(&self) -> StoreResult<i64> {
        let conn = self.connect()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?)
    }

    /// Products matching every present filter, in storage order.
    ///
    /// Filters are validated before a connection is opened.
    pub fn search(&self, filters: &SearchFilters) -> StoreResult<Vec<Product>> {
        let compiled = filters.compile()?;
        self.query_compiled(&compiled)
    }

    fn query_compiled(&self, filter: &CompiledFilter) -> StoreResult<Vec<Product>> {
        let sql = format!("{SELECT_PRODUCTS} WHERE {} ORDER BY id", filter.where_clause);
        debug!(sql = %sql, params = filter.params.len(), "querying products");

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(filter.params.iter()), row_to_product)?;

        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::StoreError;
    use crate::core::filter::SearchFilters;
    use crate::core::product::ProductForm;
    use crate::core::store::InventoryStore;
    use tempfile::TempDir;

    fn seeded_store() -> (TempDir, InventoryStore) {
        let tmp = TempDir::new().unwrap();
        let store = InventoryStore::open(tmp.path().join("autoshop.db")).unwrap();
        for (name, category, price, quantity) in [
            ("Brake Pad", "Brakes", "25.50", "4"),
            ("Oil Filter", "Filters", "9.99", "10"),
            ("Air Filter", "Filters", "14.00", "6"),
            ("Brake Disc", "Brakes", "20", "2"),
            ("100% Synthetic Oil", "Fluids", "10", "8"),
        ] {
            store
                .create(&ProductForm::new(name, category, price, quantity))
                .unwrap();
        }
        (tmp, store)
    }

    fn ids(products: &[crate::core::Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_list_in_storage_order() {
        let (_tmp, store) = seeded_store();
        assert_eq!(ids(&store.list().unwrap()), vec![1, 2, 3, 4, 5]);
        assert_eq!(store.count().unwrap(), 5);
    }

    #[test]
    fn test_get_missing() {
        let (_tmp, store) = seeded_store();
        assert_eq!(store.get(3).unwrap().name, "Air Filter");
        assert!(matches!(
            store.get(77).unwrap_err(),
            StoreError::NotFound { id: 77 }
        ));
    }

    #[test]
    fn test_empty_search_equals_list() {
        let (_tmp, store) = seeded_store();
        assert_eq!(
            store.search(&SearchFilters::new()).unwrap(),
            store.list().unwrap()
        );
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let (_tmp, store) = seeded_store();
        let found = store
            .search(&SearchFilters::new().min_price("10").max_price("20"))
            .unwrap();
        assert_eq!(ids(&found), vec![3, 4, 5]);
        assert!(found.iter().all(|p| (10.0..=20.0).contains(&p.price)));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let (_tmp, store) = seeded_store();
        let found = store
            .search(&SearchFilters::new().min_price("30").max_price("5"))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let (_tmp, store) = seeded_store();
        let found = store
            .search(&SearchFilters::new().name("Filter").max_price("10"))
            .unwrap();
        assert_eq!(ids(&found), vec![2]);
    }

    #[test]
    fn test_substring_is_unanchored_and_case_sensitive() {
        let (_tmp, store) = seeded_store();
        assert_eq!(ids(&store.search(&SearchFilters::new().name("ake")).unwrap()), vec![1, 4]);
        assert!(store
            .search(&SearchFilters::new().name("brake"))
            .unwrap()
            .is_empty());

        let found = store
            .search(&SearchFilters::new().name("brake").ignore_case(true))
            .unwrap();
        assert_eq!(ids(&found), vec![1, 4]);
    }

    #[test]
    fn test_wildcard_characters_are_literal() {
        let (_tmp, store) = seeded_store();
        assert_eq!(ids(&store.search(&SearchFilters::new().name("%")).unwrap()), vec![5]);
        assert!(store
            .search(&SearchFilters::new().name("_"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_bad_price_filter_leaves_data_unchanged() {
        let (_tmp, store) = seeded_store();
        let before = store.list().unwrap();

        let err = store
            .search(&SearchFilters::new().min_price("abc"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.list().unwrap(), before);
    }
}
