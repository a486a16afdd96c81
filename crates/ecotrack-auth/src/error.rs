//! Authentication and authorization error types.

use ecotrack_core::error::{EcotrackError, StoreError};
use thiserror::Error;

/// Token codec failures. All non-retryable.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("token has expired")]
    Expired,

    #[error("token signature does not match")]
    BadSignature,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("wrong password")]
    WrongPassword,

    #[error("invalid or missing Authorization header")]
    MissingOrMalformedHeader,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("permission denied: {reason}")]
    PermissionDenied { reason: String },
}

impl From<AuthError> for EcotrackError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Crypto(msg) => EcotrackError::Crypto(msg),
            AuthError::Store(e) => EcotrackError::Store(e),
            other => EcotrackError::AuthenticationFailed {
                reason: other.to_string(),
            },
        }
    }
}

impl From<AuthzError> for EcotrackError {
    fn from(err: AuthzError) -> Self {
        match err {
            AuthzError::PermissionDenied { reason } => EcotrackError::AuthorizationDenied { reason },
        }
    }
}
