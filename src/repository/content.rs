use diesel::dsl::exists;
use diesel::prelude::*;

use crate::db::{DbPool, get_connection};
use crate::domain::content::{Content, NewContent};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContentListQuery, ContentReader, ContentWriter};

/// Diesel implementation of [`ContentReader`] and [`ContentWriter`].
pub struct DieselContentRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselContentRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl ContentReader for DieselContentRepository<'_> {
    fn list_content(&self, query: ContentListQuery) -> RepositoryResult<Vec<Content>> {
        use crate::models::content::{Content as DbContent, ContentGenre, ContentTag};
        use crate::schema::{content, content_genres, content_tags};

        let mut conn = get_connection(self.pool)?;

        let mut sql = content::table.into_boxed();

        if let Some(content_type) = query.content_type {
            sql = sql.filter(content::content_type.eq(content_type.as_str()));
        }

        if let Some(term) = &query.search {
            // SQLite LIKE is case-insensitive for ASCII, matching the
            // case-insensitive substring contract of the search parameter.
            let pattern = format!("%{term}%");

            let genre_match = exists(
                content_genres::table
                    .filter(content_genres::content_id.eq(content::id))
                    .filter(content_genres::genre.like(pattern.clone())),
            );
            let tag_match = exists(
                content_tags::table
                    .filter(content_tags::content_id.eq(content::id))
                    .filter(content_tags::tag.like(pattern.clone())),
            );

            sql = sql.filter(
                content::title
                    .like(pattern.clone())
                    .or(content::description.like(pattern))
                    .or(genre_match)
                    .or(tag_match),
            );
        }

        let rows = sql
            .order(content::id.asc())
            .limit(query.limit)
            .load::<DbContent>(&mut conn)?;

        let genres = ContentGenre::belonging_to(&rows)
            .order(content_genres::position.asc())
            .load::<ContentGenre>(&mut conn)?
            .grouped_by(&rows);
        let tags = ContentTag::belonging_to(&rows)
            .order(content_tags::position.asc())
            .load::<ContentTag>(&mut conn)?
            .grouped_by(&rows);

        rows.into_iter()
            .zip(genres)
            .zip(tags)
            .map(|((row, genres), tags)| {
                row.try_into_domain(
                    genres.into_iter().map(|g| g.genre).collect(),
                    tags.into_iter().map(|t| t.tag).collect(),
                )
                .map_err(Into::into)
            })
            .collect()
    }
}

impl ContentWriter for DieselContentRepository<'_> {
    fn create_content(&self, new_content: &NewContent) -> RepositoryResult<Content> {
        use crate::models::content::{
            Content as DbContent, ContentGenre, ContentTag, NewContent as DbNewContent,
        };
        use crate::schema::{content, content_genres, content_tags};

        let mut conn = get_connection(self.pool)?;

        conn.transaction(|conn| {
            let row: DbContent = diesel::insert_into(content::table)
                .values(DbNewContent::from(new_content))
                .get_result(conn)?;

            let genre_rows: Vec<ContentGenre> = new_content
                .genres
                .iter()
                .enumerate()
                .map(|(position, genre)| ContentGenre {
                    content_id: row.id,
                    position: position as i32,
                    genre: genre.clone(),
                })
                .collect();
            diesel::insert_into(content_genres::table)
                .values(&genre_rows)
                .execute(conn)?;

            let tag_rows: Vec<ContentTag> = new_content
                .tags
                .iter()
                .enumerate()
                .map(|(position, tag)| ContentTag {
                    content_id: row.id,
                    position: position as i32,
                    tag: tag.clone(),
                })
                .collect();
            diesel::insert_into(content_tags::table)
                .values(&tag_rows)
                .execute(conn)?;

            row.try_into_domain(new_content.genres.clone(), new_content.tags.clone())
                .map_err(Into::into)
        })
    }
}
