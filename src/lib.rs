use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use log::{error, warn};

use crate::db::{DbPool, establish_connection_pool};
use crate::models::config::ServerConfig;
use crate::routes::content::{create_content, list_content};
use crate::routes::main::{index, test_database};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
///
/// A missing or unreachable database does not abort startup; storage-backed
/// endpoints degrade and the `/test` endpoint reports the state.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool: Option<DbPool> = match &server_config.database_url {
        Some(url) => match establish_connection_pool(url) {
            Ok(pool) => Some(pool),
            Err(e) => {
                error!("Failed to establish database connection: {e}");
                None
            }
        },
        None => {
            warn!("DATABASE_URL is not set; content endpoints are degraded");
            None
        }
    };

    let bind_address = (server_config.host.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .service(index)
            .service(test_database)
            .service(
                web::scope("/api")
                    .service(list_content)
                    .service(create_content),
            )
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
