pub mod extractors;
pub mod middleware;
pub mod token;

use serde::Deserialize;
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use token::{Claims, TokenKeys, TOKEN_TTL_SECS};

/// Payload for a login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for a registration request. Both fields are required and
/// non-empty; anything else is the caller's choice.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
