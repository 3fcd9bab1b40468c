//! Command implementations

pub mod completions;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod product;
pub mod search;
pub mod status;
