//! Transport-free service functions shared by the HTTP handlers.

use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::errors::RepositoryError;

pub mod content;

#[derive(Debug, Error)]
/// Errors surfaced by the service layer.
pub enum ServiceError {
    /// A field of the inbound payload violated its declared constraint.
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    /// The storage layer failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
