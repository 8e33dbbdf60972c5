use actix_web::{HttpResponse, Responder, get, post, web};

use crate::db::DbPool;
use crate::dto::content::ListContentParams;
use crate::forms::content::CreateContentForm;
use crate::repository::content::DieselContentRepository;
use crate::routes::{service_error_response, storage_unavailable};
use crate::services;

#[get("/content")]
pub async fn list_content(
    params: web::Query<ListContentParams>,
    pool: web::Data<Option<DbPool>>,
) -> impl Responder {
    let Some(pool) = pool.as_ref() else {
        return storage_unavailable();
    };
    let repo = DieselContentRepository::new(pool);

    match services::content::list_content(&repo, params.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => service_error_response("list content", e),
    }
}

#[post("/content")]
pub async fn create_content(
    form: web::Json<CreateContentForm>,
    pool: web::Data<Option<DbPool>>,
) -> impl Responder {
    let Some(pool) = pool.as_ref() else {
        return storage_unavailable();
    };
    let repo = DieselContentRepository::new(pool);

    match services::content::create_content(&repo, form.into_inner()) {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => service_error_response("create content", e),
    }
}
