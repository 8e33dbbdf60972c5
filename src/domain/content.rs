use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a catalog entry. Stored as lowercase text.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Drama,
    Cartoon,
    Other,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Drama => "drama",
            ContentType::Cartoon => "cartoon",
            ContentType::Other => "other",
        }
    }
}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(ContentType::Movie),
            "drama" => Ok(ContentType::Drama),
            "cartoon" => Ok(ContentType::Cartoon),
            "other" => Ok(ContentType::Other),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored catalog entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Content {
    pub id: i32,
    pub title: String,
    pub content_type: ContentType,
    pub description: Option<String>,
    pub year: Option<i32>,
    /// Ordered as supplied on creation.
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub episodes: Option<i32>,
    pub poster_url: Option<String>,
    pub video_url: Option<String>,
    /// Ordered as supplied on creation.
    pub tags: Vec<String>,
}

/// Payload for inserting a new catalog entry.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewContent {
    pub title: String,
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

impl NewContent {
    #[must_use]
    pub fn new(title: String, content_type: ContentType) -> Self {
        Self {
            title,
            content_type,
            description: None,
            year: None,
            genres: Vec::new(),
            rating: None,
            duration_minutes: None,
            episodes: None,
            poster_url: None,
            video_url: None,
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_round_trips_through_str() {
        for ty in [
            ContentType::Movie,
            ContentType::Drama,
            ContentType::Cartoon,
            ContentType::Other,
        ] {
            assert_eq!(ty.as_str().parse::<ContentType>(), Ok(ty));
        }
    }

    #[test]
    fn content_type_rejects_unknown_values() {
        assert_eq!(
            "series".parse::<ContentType>(),
            Err(UnknownContentType("series".to_string()))
        );
    }

    #[test]
    fn content_type_serde_uses_lowercase() {
        let json = serde_json::to_string(&ContentType::Cartoon).unwrap();
        assert_eq!(json, "\"cartoon\"");
        let back: ContentType = serde_json::from_str("\"movie\"").unwrap();
        assert_eq!(back, ContentType::Movie);
        assert!(serde_json::from_str::<ContentType>("\"anime\"").is_err());
    }
}
