//! Inbound payload definitions backing the catalog routes.

pub mod content;
