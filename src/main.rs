use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use taskwarden::auth::TokenKeys;
use taskwarden::config::Config;
use taskwarden::routes;
use taskwarden::services::{TaskService, UserService};
use taskwarden::storage::PgStorage;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let keys = TokenKeys::from_base64_secret(&config.jwt_secret)
        .expect("JWT_SECRET must be a base64-encoded signing key");

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    let storage = PgStorage::new(pool);

    let task_service = web::Data::new(TaskService::new(storage.clone()));
    let user_service = web::Data::new(UserService::new(storage, keys.clone()));

    log::info!("Starting TaskWarden server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(task_service.clone())
            .app_data(user_service.clone())
            .configure(|cfg| routes::config::<PgStorage>(cfg, &keys))
    })
    .bind((config.server_host, config.server_port))?
    .run()
    .await
}
