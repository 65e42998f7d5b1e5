//! Caller identity as established by a `TokenValidator`.

use super::UserId;
use thiserror::Error;

/// The bearer of a valid token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Same id as the developer record in the directory.
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
        }
    }
}

/// Why a token was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// The validator could not reach its backing service; maps to 503.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}
