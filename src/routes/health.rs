use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Health check endpoint
///
/// Returns the service name, current status and timestamp.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "timestamp": Utc::now()
    }))
}
