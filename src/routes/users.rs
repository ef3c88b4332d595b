use actix_web::{web, HttpResponse};

use crate::auth::{LoginRequest, RegisterRequest};
use crate::error::{AuthError, UserError};
use crate::services::UserService;
use crate::storage::Storage;

/// Register a new user.
pub async fn register<S: Storage>(
    service: web::Data<UserService<S>>,
    input: web::Json<RegisterRequest>,
) -> Result<HttpResponse, UserError> {
    service.create_new_user(input.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Authenticate a user; the response body is the issued token.
pub async fn login<S: Storage>(
    service: web::Data<UserService<S>>,
    input: web::Json<LoginRequest>,
) -> Result<HttpResponse, AuthError> {
    let token = service
        .authenticate(&input.username, &input.password)
        .await?;
    Ok(HttpResponse::Ok().body(token))
}
