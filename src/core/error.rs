//! Error taxonomy for the inventory store
//!
//! Validation and not-found errors are recoverable: the operation is aborted
//! before any mutation and the caller shows a message. Storage errors are
//! propagated unchanged.

use miette::Diagnostic;
use thiserror::Error;

/// Input that cannot become a product or a search filter
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("'{field}' is required")]
    #[diagnostic(
        code(autoshop::validation::missing_field),
        help("fill in name, category, price and quantity")
    )]
    MissingField { field: &'static str },

    #[error("'{field}' must be a number, got '{value}'")]
    #[diagnostic(
        code(autoshop::validation::invalid_number),
        help("use a decimal such as 25.50")
    )]
    InvalidNumber { field: &'static str, value: String },

    #[error("'{field}' must be a whole number, got '{value}'")]
    #[diagnostic(
        code(autoshop::validation::invalid_integer),
        help("use an integer such as 4")
    )]
    InvalidInteger { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::InvalidNumber { field, .. }
            | ValidationError::InvalidInteger { field, .. } => field,
        }
    }
}

/// Errors returned by [`crate::core::InventoryStore`]
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("no product with id {id}")]
    #[diagnostic(
        code(autoshop::not_found),
        help("run `autoshop product list` to see existing ids")
    )]
    NotFound { id: i64 },

    #[error("no product selected")]
    #[diagnostic(code(autoshop::no_selection), help("pass the id of the product"))]
    NoSelection,

    #[error("database error: {0}")]
    #[diagnostic(code(autoshop::storage))]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(code(autoshop::io))]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. } | StoreError::NoSelection)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
