//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what a validated bearer token resolves to. Any
//! token scheme can populate it through the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Restaurant owner extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier.
    pub id: UserId,

    /// Email address from the token claims.
    pub email: String,

    /// Restaurant name claim, when the issuer includes it.
    pub restaurant_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>, restaurant_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            restaurant_name,
        }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
