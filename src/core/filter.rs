//! Search filters compiled into a parameterized WHERE clause
//!
//! Raw filter input is first turned into a list of [`Predicate`]s, then the
//! list is compiled into SQL. User text only ever reaches SQLite as a bound
//! parameter; column names come from the closed [`Column`] enum.

use rusqlite::types::Value;

use crate::core::error::ValidationError;
use crate::core::product::parse_price;

/// Columns that may appear in a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Category,
    Price,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Category => "category",
            Column::Price => "price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Field contains the value anywhere
    Contains { ignore_case: bool },
    AtLeast,
    AtMost,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Real(f64),
}

impl FilterValue {
    fn to_sql_value(&self) -> Value {
        match self {
            FilterValue::Text(s) => Value::Text(s.clone()),
            FilterValue::Real(f) => Value::Real(*f),
        }
    }
}

/// One conjunct of a search
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: Column,
    pub op: Operator,
    pub value: FilterValue,
}

impl Predicate {
    fn to_sql(&self) -> String {
        let col = self.column.as_str();
        match self.op {
            Operator::Contains { ignore_case: false } => format!("instr({col}, ?) > 0"),
            Operator::Contains { ignore_case: true } => {
                format!("instr(lower({col}), lower(?)) > 0")
            }
            Operator::AtLeast => format!("{col} >= ?"),
            Operator::AtMost => format!("{col} <= ?"),
        }
    }
}

/// Raw search input. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Compare substrings case-insensitively
    pub ignore_case: bool,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn min_price(mut self, min: impl Into<String>) -> Self {
        self.min_price = Some(min.into());
        self
    }

    pub fn max_price(mut self, max: impl Into<String>) -> Self {
        self.max_price = Some(max.into());
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Validate the filters and build the predicate list.
    ///
    /// Order is fixed (name, category, min_price, max_price) so the same
    /// filters always compile to the same SQL.
    pub fn predicates(&self) -> Result<Vec<Predicate>, ValidationError> {
        let mut predicates = Vec::new();
        let contains = Operator::Contains {
            ignore_case: self.ignore_case,
        };

        if let Some(name) = present(&self.name) {
            predicates.push(Predicate {
                column: Column::Name,
                op: contains,
                value: FilterValue::Text(name.to_string()),
            });
        }

        if let Some(category) = present(&self.category) {
            predicates.push(Predicate {
                column: Column::Category,
                op: contains,
                value: FilterValue::Text(category.to_string()),
            });
        }

        if let Some(min) = present(&self.min_price) {
            predicates.push(Predicate {
                column: Column::Price,
                op: Operator::AtLeast,
                value: FilterValue::Real(parse_price("min_price", min)?),
            });
        }

        if let Some(max) = present(&self.max_price) {
            predicates.push(Predicate {
                column: Column::Price,
                op: Operator::AtMost,
                value: FilterValue::Real(parse_price("max_price", max)?),
            });
        }

        Ok(predicates)
    }

    pub fn compile(&self) -> Result<CompiledFilter, ValidationError> {
        Ok(CompiledFilter::from_predicates(&self.predicates()?))
    }
}

/// Only the empty string counts as absent; whitespace is kept and parsed
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A WHERE clause and its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFilter {
    pub where_clause: String,
    pub params: Vec<Value>,
}

impl CompiledFilter {
    pub fn from_predicates(predicates: &[Predicate]) -> Self {
        let mut where_clause = String::from("1=1");
        let mut params = Vec::with_capacity(predicates.len());

        for predicate in predicates {
            where_clause.push_str(" AND ");
            where_clause.push_str(&predicate.to_sql());
            params.push(predicate.value.to_sql_value());
        }

        Self {
            where_clause,
            params,
        }
    }
}
