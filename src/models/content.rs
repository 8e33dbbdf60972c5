use diesel::prelude::*;

use crate::domain::content::{
    Content as DomainContent, NewContent as DomainNewContent, UnknownContentType,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::content)]
/// Diesel model for [`crate::domain::content::Content`] scalar fields.
pub struct Content {
    pub id: i32,
    pub title: String,
    pub content_type: String,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub episodes: Option<i32>,
    pub poster_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::content)]
/// Insertable form of [`Content`].
pub struct NewContent<'a> {
    pub title: &'a str,
    pub content_type: &'a str,
    pub description: Option<&'a str>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub episodes: Option<i32>,
    pub poster_url: Option<&'a str>,
    pub video_url: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Insertable)]
#[diesel(table_name = crate::schema::content_genres)]
#[diesel(belongs_to(Content, foreign_key = content_id))]
#[diesel(primary_key(content_id, position))]
/// One genre entry of a content row; `position` preserves list order.
pub struct ContentGenre {
    pub content_id: i32,
    pub position: i32,
    pub genre: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Insertable)]
#[diesel(table_name = crate::schema::content_tags)]
#[diesel(belongs_to(Content, foreign_key = content_id))]
#[diesel(primary_key(content_id, position))]
/// One tag entry of a content row; `position` preserves list order.
pub struct ContentTag {
    pub content_id: i32,
    pub position: i32,
    pub tag: String,
}

impl Content {
    /// Assembles the domain record from the scalar row and its child rows.
    ///
    /// Fails when the stored `content_type` text is outside the enumeration.
    pub fn try_into_domain(
        self,
        genres: Vec<String>,
        tags: Vec<String>,
    ) -> Result<DomainContent, UnknownContentType> {
        Ok(DomainContent {
            id: self.id,
            title: self.title,
            content_type: self.content_type.parse()?,
            description: self.description,
            year: self.year,
            genres,
            rating: self.rating,
            duration_minutes: self.duration_minutes,
            episodes: self.episodes,
            poster_url: self.poster_url,
            video_url: self.video_url,
            tags,
        })
    }
}

impl<'a> From<&'a DomainNewContent> for NewContent<'a> {
    fn from(content: &'a DomainNewContent) -> Self {
        Self {
            title: content.title.as_str(),
            content_type: content.content_type.as_str(),
            description: content.description.as_deref(),
            year: content.year,
            rating: content.rating,
            duration_minutes: content.duration_minutes,
            episodes: content.episodes,
            poster_url: content.poster_url.as_deref(),
            video_url: content.video_url.as_deref(),
        }
    }
}
