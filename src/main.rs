use actix_web::{cookie::Key, web, App, HttpServer};
use course_catalog::config::EnvConfig;
use course_catalog::db::postgres_service::PostgresService;
use course_catalog::routes::configure_routes;
use course_catalog::utils::webutils::CookieKey;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let cookie_key = CookieKey(Key::derive_from(config.cookie_secret.as_bytes()));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(cookie_key.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
