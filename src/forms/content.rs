use serde::Deserialize;
use validator::Validate;

use crate::domain::content::{ContentType, NewContent};

#[derive(Debug, Clone, Deserialize, Validate)]
/// JSON body for creating a catalog entry.
///
/// Field constraints mirror the stored schema; `validate()` reports every
/// violated field before anything touches storage. Membership of `type` in
/// the enumeration is enforced during deserialization.
pub struct CreateContentForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = 1888, max = 2100))]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: Option<f64>,
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,
    #[validate(range(min = 1))]
    pub episodes: Option<i32>,
    pub poster_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateContentForm> for NewContent {
    fn from(form: CreateContentForm) -> Self {
        Self {
            title: form.title,
            content_type: form.content_type,
            description: form.description,
            year: form.year,
            genres: form.genres,
            rating: form.rating,
            duration_minutes: form.duration_minutes,
            episodes: form.episodes,
            poster_url: form.poster_url,
            video_url: form.video_url,
            tags: form.tags,
        }
    }
}
