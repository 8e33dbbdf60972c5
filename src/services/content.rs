use validator::Validate;

use crate::domain::content::NewContent;
use crate::dto::content::{ContentOut, CreatedResponse, ListContentParams};
use crate::forms::content::CreateContentForm;
use crate::repository::{ContentListQuery, ContentReader, ContentWriter};
use crate::services::ServiceResult;

/// Returns the catalog entries matching the supplied filters.
pub fn list_content<R>(repo: &R, params: ListContentParams) -> ServiceResult<Vec<ContentOut>>
where
    R: ContentReader + ?Sized,
{
    params.validate()?;

    let query = ContentListQuery::from(params);
    let items = repo.list_content(query)?;

    Ok(items.into_iter().map(Into::into).collect())
}

/// Validates the payload and inserts a new catalog entry, returning its
/// string-formatted identifier. Nothing is written when validation fails.
pub fn create_content<R>(repo: &R, form: CreateContentForm) -> ServiceResult<CreatedResponse>
where
    R: ContentWriter + ?Sized,
{
    form.validate()?;

    let new_content = NewContent::from(form);
    let created = repo.create_content(&new_content)?;

    Ok(CreatedResponse {
        id: created.id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{Content, ContentType};
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn stored(id: i32, title: &str) -> Content {
        Content {
            id,
            title: title.to_string(),
            content_type: ContentType::Movie,
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

    #[test]
    fn list_passes_filters_to_repository() {
        let mut repo = MockRepository::new();
        repo.expect_list_content()
            .withf(|query| {
                query.content_type == Some(ContentType::Movie)
                    && query.search.as_deref() == Some("heat")
                    && query.limit == 5
            })
            .return_once(|_| Ok(vec![stored(1, "Heat")]));

        let params = ListContentParams {
            content_type: Some(ContentType::Movie),
            q: Some("heat".to_string()),
            limit: Some(5),
        };
        let items = list_content(&repo, params).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].title, "Heat");
    }

    #[test]
    fn blank_search_reaches_repository_as_absent() {
        let mut repo = MockRepository::new();
        repo.expect_list_content()
            .withf(|query| query.search.is_none())
            .return_once(|_| Ok(vec![]));

        let params = ListContentParams {
            content_type: None,
            q: Some("   ".to_string()),
            limit: None,
        };
        assert!(list_content(&repo, params).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_limit_is_rejected_without_repository_call() {
        let mut repo = MockRepository::new();
        repo.expect_list_content().times(0);

        let params = ListContentParams {
            content_type: None,
            q: None,
            limit: Some(0),
        };
        assert!(matches!(
            list_content(&repo, params),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn create_returns_string_identifier() {
        let mut repo = MockRepository::new();
        repo.expect_create_content()
            .withf(|new_content| new_content.title == "Test" && new_content.year == Some(2020))
            .return_once(|_| Ok(stored(3, "Test")));

        let form: CreateContentForm =
            serde_json::from_str(r#"{"title":"Test","type":"movie","year":2020}"#).unwrap();
        let created = create_content(&repo, form).unwrap();
        assert_eq!(created.id, "3");
    }

    #[test]
    fn invalid_payload_is_rejected_before_storage() {
        let mut repo = MockRepository::new();
        repo.expect_create_content().times(0);

        let form: CreateContentForm =
            serde_json::from_str(r#"{"title":"Test","type":"movie","rating":11.0}"#).unwrap();
        assert!(matches!(
            create_content(&repo, form),
            Err(ServiceError::Validation(_))
        ));
    }
}
