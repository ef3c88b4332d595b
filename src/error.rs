//!
//! # Domain Error Taxonomy
//!
//! This module defines the error values the service layer returns for every
//! expected business outcome, together with their HTTP translations.
//!
//! Each enum implements `actix_web::error::ResponseError`, so handlers can
//! bubble service errors with `?` and Actix Web renders the mapped status
//! code. Infrastructure failures never appear here directly: every service
//! operation catches them at its boundary and normalizes them to the
//! `Unexpected` variant of its taxonomy.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;

/// Outcomes of the task engine and query dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    /// The request payload failed validation (empty task name).
    BadRequest,
    /// The acting user does not exist in storage.
    UserNotExists,
    /// The acting user is not the owner of the task.
    UnauthorizedUser,
    /// No task with the requested id exists.
    NoTaskExists,
    /// A storage failure was caught at the service boundary.
    Unexpected,
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskError::BadRequest => write!(f, "Bad request"),
            TaskError::UserNotExists => write!(f, "User does not exist"),
            TaskError::UnauthorizedUser => write!(f, "User is not the task owner"),
            TaskError::NoTaskExists => write!(f, "Task does not exist"),
            TaskError::Unexpected => write!(f, "Unexpected error"),
        }
    }
}

impl ResponseError for TaskError {
    fn error_response(&self) -> HttpResponse {
        match self {
            TaskError::BadRequest | TaskError::UserNotExists => {
                HttpResponse::BadRequest().json(json!({ "error": self.to_string() }))
            }
            TaskError::UnauthorizedUser => {
                HttpResponse::Unauthorized().json(json!({ "error": self.to_string() }))
            }
            // A missing task is reported as an empty response, not a 404.
            TaskError::NoTaskExists => HttpResponse::NoContent().finish(),
            TaskError::Unexpected => {
                HttpResponse::InternalServerError().json(json!({ "error": self.to_string() }))
            }
        }
    }
}

/// Outcomes of user registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserError {
    /// Username or password was empty.
    BadRequest,
    /// A storage failure was caught at the service boundary.
    Unexpected,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserError::BadRequest => write!(f, "Bad request"),
            UserError::Unexpected => write!(f, "Unexpected error"),
        }
    }
}

impl ResponseError for UserError {
    fn error_response(&self) -> HttpResponse {
        match self {
            UserError::BadRequest => {
                HttpResponse::BadRequest().json(json!({ "error": self.to_string() }))
            }
            UserError::Unexpected => {
                HttpResponse::InternalServerError().json(json!({ "error": self.to_string() }))
            }
        }
    }
}

/// Outcomes of authentication.
///
/// Unknown username and wrong password collapse into the single
/// `InvalidCredentials` variant; callers learn nothing about which check
/// failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    /// A storage or signing failure was caught at the service boundary.
    Unexpected,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::Unexpected => write!(f, "Unexpected error"),
        }
    }
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AuthError::InvalidCredentials => {
                HttpResponse::Unauthorized().json(json!({ "error": self.to_string() }))
            }
            AuthError::Unexpected => {
                HttpResponse::InternalServerError().json(json!({ "error": self.to_string() }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_error_responses() {
        assert_eq!(TaskError::BadRequest.error_response().status(), 400);
        assert_eq!(TaskError::UserNotExists.error_response().status(), 400);
        assert_eq!(TaskError::UnauthorizedUser.error_response().status(), 401);
        assert_eq!(TaskError::NoTaskExists.error_response().status(), 204);
        assert_eq!(TaskError::Unexpected.error_response().status(), 500);
    }

    #[test]
    fn test_user_error_responses() {
        assert_eq!(UserError::BadRequest.error_response().status(), 400);
        assert_eq!(UserError::Unexpected.error_response().status(), 500);
    }

    #[test]
    fn test_auth_error_responses() {
        assert_eq!(AuthError::InvalidCredentials.error_response().status(), 401);
        assert_eq!(AuthError::Unexpected.error_response().status(), 500);
    }
}
