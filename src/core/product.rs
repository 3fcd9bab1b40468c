//! Product records and validation of raw form input

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationError;

/// A stored inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned id, never reused
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

/// Validated mutable fields of a product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductFields {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Raw, unvalidated input as typed into the product form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Prefill a form from a stored product (used by edit)
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    /// Check that every field is filled in, then parse the numeric ones.
    ///
    /// Emptiness is checked for all fields before any number is parsed, so a
    /// blank form reports the missing field rather than a parse failure.
    pub fn validate(&self) -> Result<ProductFields, ValidationError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        require("price", &self.price)?;
        require("quantity", &self.quantity)?;

        Ok(ProductFields {
            name: self.name.clone(),
            category: self.category.clone(),
            price: parse_price("price", &self.price)?,
            quantity: parse_quantity("quantity", &self.quantity)?,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(())
    }
}

/// Parse a real number, rejecting NaN and infinities
pub fn parse_price(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

pub fn parse_quantity(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}
