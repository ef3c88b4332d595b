use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user as stored in the database.
///
/// `token` holds the most recently issued login token. It is a record only:
/// token validity is decided by signature and expiry, never by comparing
/// against this column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub token: Option<String>,
}

/// A user record about to be inserted; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
