//!
//! # Credential Service
//!
//! Validates registration input, stores user records, authenticates
//! username/password pairs and issues signed expiring tokens.
//!
//! Passwords are stored as given and compared by direct equality. That
//! mirrors the system this one replaces; see DESIGN.md before changing it,
//! since callers and tests depend on the exact comparison semantics.

use jsonwebtoken::errors::Error as JwtError;
use validator::Validate;

use crate::auth::token::{Claims, TokenKeys};
use crate::auth::RegisterRequest;
use crate::error::{AuthError, UserError};
use crate::models::NewUser;
use crate::storage::{Storage, StorageTx};

pub struct UserService<S> {
    storage: S,
    keys: TokenKeys,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S, keys: TokenKeys) -> Self {
        Self { storage, keys }
    }

    /// Registers a new user. An empty username or password is a
    /// `BadRequest`; storage failures surface as `Unexpected`.
    pub async fn create_new_user(&self, input: RegisterRequest) -> Result<(), UserError> {
        if input.validate().is_err() {
            return Err(UserError::BadRequest);
        }

        let mut tx = self.storage.begin().await.map_err(|error| {
            log::error!("Unexpected storage failure trying to save new user: {}", error);
            UserError::Unexpected
        })?;
        tx.insert_user(NewUser {
            username: input.username,
            password: input.password,
        })
        .await
        .map_err(|error| {
            log::error!("Unexpected storage failure trying to save new user: {}", error);
            UserError::Unexpected
        })?;
        tx.commit().await.map_err(|error| {
            log::error!("Unexpected storage failure trying to save new user: {}", error);
            UserError::Unexpected
        })?;
        Ok(())
    }

    /// Checks the credentials and, on a match, issues a fresh token and
    /// records it on the user row.
    ///
    /// An unknown username and a wrong password both come back as
    /// `InvalidCredentials`, carrying no detail about which check failed.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let mut tx = self.storage.begin().await.map_err(|error| {
            log::error!("Unexpected storage failure trying to authenticate: {}", error);
            AuthError::Unexpected
        })?;
        let user = tx.find_user_by_username(username).await.map_err(|error| {
            log::error!("Unexpected storage failure trying to authenticate: {}", error);
            AuthError::Unexpected
        })?;

        let mut user = match user {
            Some(user) if user.password == password => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = self.generate_token(&user.username).map_err(|error| {
            log::error!("Failed to sign token for '{}': {}", user.username, error);
            AuthError::Unexpected
        })?;
        user.token = Some(token.clone());

        tx.save_user(&user).await.map_err(|error| {
            log::error!("Unexpected storage failure trying to store token: {}", error);
            AuthError::Unexpected
        })?;
        tx.commit().await.map_err(|error| {
            log::error!("Unexpected storage failure trying to store token: {}", error);
            AuthError::Unexpected
        })?;
        Ok(token)
    }

    /// Signs a token for `username`: subject = username, issued now,
    /// expiring one TTL later. Pure apart from reading the clock.
    pub fn generate_token(&self, username: &str) -> Result<String, JwtError> {
        self.keys.sign(&Claims::issued_now(username))
    }
}
