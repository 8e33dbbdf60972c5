//! DTOs exposed by the catalog API endpoints.

pub mod content;
