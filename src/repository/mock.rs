//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::content::{Content, NewContent};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContentListQuery, ContentReader, ContentWriter};

mock! {
    pub Repository {}

    impl ContentReader for Repository {
        fn list_content(&self, query: ContentListQuery) -> RepositoryResult<Vec<Content>>;
    }

    impl ContentWriter for Repository {
        fn create_content(&self, new_content: &NewContent) -> RepositoryResult<Content>;
    }
}
