use crate::domain::content::{Content, ContentType, NewContent};
use crate::repository::errors::RepositoryResult;

pub mod content;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Default number of records returned by a list query.
pub const DEFAULT_LIMIT: i64 = 50;
/// Upper bound a caller may request.
pub const MAX_LIMIT: i64 = 100;

/// Filter parameters for listing catalog entries.
///
/// An empty or whitespace-only search string is treated as no search at all,
/// so `ContentListQuery::new().search("  ")` matches every record.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentListQuery {
    pub content_type: Option<ContentType>,
    pub search: Option<String>,
    pub limit: i64,
}

impl Default for ContentListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentListQuery {
    pub fn new() -> Self {
        Self {
            content_type: None,
            search: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Require an exact match on the content type.
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Require a case-insensitive substring match on title, description,
    /// any genre entry, or any tag entry.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    /// Bound the number of returned records.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

pub trait ContentReader {
    /// Returns the records matching `query`, in insertion order.
    fn list_content(&self, query: ContentListQuery) -> RepositoryResult<Vec<Content>>;
}

pub trait ContentWriter {
    /// Inserts a record and returns it with its assigned identifier.
    fn create_content(&self, new_content: &NewContent) -> RepositoryResult<Content>;
}
