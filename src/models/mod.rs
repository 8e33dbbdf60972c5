//! Database models backing the catalog repository.

pub mod config;
pub mod content;
