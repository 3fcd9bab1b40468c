//! Autoshop: inventory management for an auto-parts shop
//!
//! A single `products` table in a local SQLite file, with add, edit,
//! delete, list and filtered search.

pub mod cli;
pub mod core;
