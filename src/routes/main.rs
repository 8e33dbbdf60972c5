use actix_web::{HttpResponse, Responder, get, web};
use diesel::prelude::*;
use serde_json::json;

use crate::db::{DbPool, get_connection};
use crate::models::config::ServerConfig;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({"message": "MOVIEPLACE API is running"}))
}

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = diesel::sql_types::Text)]
    name: String,
}

/// Diagnostic snapshot of storage connectivity and environment configuration.
/// Informational only; the shape carries no contract guarantees.
#[get("/test")]
pub async fn test_database(
    pool: web::Data<Option<DbPool>>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut response = json!({
        "backend": "running",
        "database": "not available",
        "database_url": if server_config.database_url.is_some() { "set" } else { "not set" },
        "database_name": server_config.database_name.as_deref().unwrap_or("not set"),
        "connection_status": "not connected",
        "tables": [],
    });

    if let Some(pool) = pool.as_ref() {
        match get_connection(pool) {
            Ok(mut conn) => {
                response["connection_status"] = "connected".into();
                let tables = diesel::sql_query(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )
                .load::<TableName>(&mut conn);
                match tables {
                    Ok(tables) => {
                        response["database"] = "connected and working".into();
                        response["tables"] = tables
                            .into_iter()
                            .take(10)
                            .map(|t| t.name)
                            .collect::<Vec<_>>()
                            .into();
                    }
                    Err(e) => {
                        response["database"] = format!("connected but error: {e}").into();
                    }
                }
            }
            Err(e) => {
                response["connection_status"] = format!("error: {e}").into();
            }
        }
    }

    HttpResponse::Ok().json(response)
}
