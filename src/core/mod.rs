//! Core module - inventory store, validation and configuration

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod product;
pub mod store;

pub use config::Config;
pub use error::{StoreError, StoreResult, ValidationError};
pub use filter::{Column, CompiledFilter, FilterValue, Operator, Predicate, SearchFilters};
pub use product::{Product, ProductFields, ProductForm};
pub use store::{ImportReport, InventoryStore, DEFAULT_DB_FILE};
