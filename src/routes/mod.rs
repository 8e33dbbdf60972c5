//! HTTP handlers for the catalog API.

use actix_web::HttpResponse;
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod content;
pub mod main;

/// Maps a service failure onto an HTTP response: validation failures carry
/// the per-field messages back to the caller, storage failures stay opaque.
pub(crate) fn service_error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => HttpResponse::BadRequest().json(json!({
            "error": "validation failed",
            "fields": errors,
        })),
        ServiceError::Repository(e) => {
            error!("Failed to {context}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Answer for storage-backed endpoints when no database is configured.
pub(crate) fn storage_unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(json!({
        "error": "database is not configured",
    }))
}
