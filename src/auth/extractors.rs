use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;

/// Extracts the authenticated username from request extensions.
///
/// Routes using this extractor must sit behind
/// [`AuthMiddleware`](crate::auth::AuthMiddleware), which validates the
/// token and inserts the claims. A missing entry means the middleware did
/// not run; responding unauthorized is the safe default.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser(claims.sub.clone()))),
            None => ready(Err(ErrorUnauthorized("Missing token"))),
        }
    }
}
