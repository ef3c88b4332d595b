pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

use crate::auth::{AuthMiddleware, TokenKeys};
use crate::storage::Storage;

/// Builds the route table over any storage backend. The `/tasks` scope is
/// wrapped in the token middleware; registration, login and the health
/// check stay open.
pub fn config<S: Storage>(cfg: &mut web::ServiceConfig, keys: &TokenKeys) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(users::register::<S>))
            .route("/login", web::post().to(users::login::<S>)),
    )
    .service(
        web::scope("/tasks")
            .wrap(AuthMiddleware::new(keys.clone()))
            .route("", web::get().to(tasks::get_tasks::<S>))
            .route("", web::post().to(tasks::create_task::<S>))
            .route("/{id}", web::get().to(tasks::get_task::<S>))
            .route("/{id}", web::put().to(tasks::update_task::<S>))
            .route("/{id}", web::delete().to(tasks::delete_task::<S>))
            .route("/{id}/complete", web::patch().to(tasks::complete_task::<S>)),
    )
    .service(health::health);
}
