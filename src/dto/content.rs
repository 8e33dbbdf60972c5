use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::content::{Content, ContentType};
use crate::repository::{ContentListQuery, MAX_LIMIT};

/// Query-string parameters accepted by `GET /api/content`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListContentParams {
    /// Optional exact filter on the content type.
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
    /// Optional free-text search over title, description, genres and tags.
    pub q: Option<String>,
    /// Maximum number of records to return (1–100, default 50).
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl From<ListContentParams> for ContentListQuery {
    fn from(params: ListContentParams) -> Self {
        let mut query = ContentListQuery::new();
        if let Some(content_type) = params.content_type {
            query = query.content_type(content_type);
        }
        if let Some(q) = params.q {
            query = query.search(q);
        }
        if let Some(limit) = params.limit {
            query = query.limit(limit.min(MAX_LIMIT));
        }
        query
    }
}

/// Response shape of a catalog entry.
///
/// The identifier is string-formatted; absent optional fields serialize as
/// explicit `null`, while genres and tags are always arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentOut {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub episodes: Option<i32>,
    pub poster_url: Option<String>,
    pub video_url: Option<String>,
    pub tags: Vec<String>,
}

impl From<Content> for ContentOut {
    fn from(content: Content) -> Self {
        Self {
            id: content.id.to_string(),
            title: content.title,
            content_type: content.content_type,
            description: content.description,
            year: content.year,
            genres: content.genres,
            rating: content.rating,
            duration_minutes: content.duration_minutes,
            episodes: content.episodes,
            poster_url: content.poster_url,
            video_url: content.video_url,
            tags: content.tags,
        }
    }
}

/// Response body of a successful `POST /api/content`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_content() -> Content {
        Content {
            id: 42,
            title: "Test".to_string(),
            content_type: ContentType::Movie,
            description: None,
            year: Some(2020),
            genres: Vec::new(),
            rating: None,
            duration_minutes: None,
            episodes: None,
            poster_url: None,
            video_url: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn id_is_string_formatted() {
        let out = ContentOut::from(sample_content());
        assert_eq!(out.id, "42");
    }

    #[test]
    fn absent_optionals_serialize_as_null_and_empty_lists() {
        let json = serde_json::to_value(ContentOut::from(sample_content())).unwrap();
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["rating"], serde_json::Value::Null);
        assert_eq!(json["genres"], serde_json::json!([]));
        assert_eq!(json["tags"], serde_json::json!([]));
        assert_eq!(json["type"], "movie");
    }

    #[test]
    fn params_convert_into_query() {
        let params = ListContentParams {
            content_type: Some(ContentType::Drama),
            q: Some(" love ".to_string()),
            limit: Some(10),
        };
        let query = ContentListQuery::from(params);
        assert_eq!(query.content_type, Some(ContentType::Drama));
        assert_eq!(query.search.as_deref(), Some("love"));
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn default_params_use_default_limit() {
        let query = ContentListQuery::from(ListContentParams::default());
        assert_eq!(query, ContentListQuery::new());
    }
}
