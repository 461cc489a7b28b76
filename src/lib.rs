//! REST backend for posts, products and users over SQLite.
//!
//! With only the `data` feature the crate exposes the persistence layer
//! (domain, models, schema, repository and the list-query executor); the
//! default `server` feature adds the Actix-web application on top.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{build_cors, configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::http::header;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::{auth, posts, products, users};

    /// Registers every route of the API.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(auth::login)
            .service(users::create_user)
            .service(users::get_user)
            .service(posts::list_posts)
            .service(posts::get_post)
            .service(posts::create_post)
            .service(posts::update_post)
            .service(posts::delete_post)
            .service(products::list_products)
            .service(products::get_product)
            .service(products::create_product)
            .service(products::update_product)
            .service(products::delete_product);
    }

    /// CORS policy allowing credentialed requests from `origins` only.
    pub fn build_cors(origins: &[String]) -> Cors {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(build_cors(&server_config.cors_origins))
                .wrap(middleware::Logger::default())
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
                .configure(configure)
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
