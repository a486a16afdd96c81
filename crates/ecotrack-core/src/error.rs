//! Error types for the ecotrack system.

use thiserror::Error;

/// Persistence-layer error taxonomy.
///
/// Store implementations translate backend-native failures into these
/// kinds instead of leaking driver errors. `UniqueViolation` and
/// `ForeignKeyViolation` are caller data errors; `Syntax` and `Other`
/// are internal. `Cache` carries a cache-backend failure surfaced by a
/// caching repository — never silently downgraded to store-only reads.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("referenced entity not found")]
    ForeignKeyViolation,

    #[error("malformed query: {0}")]
    Syntax(String),

    #[error("cache backend error: {0}")]
    Cache(String),

    #[error("store error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum EcotrackError {
    #[error("entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("authorization denied: {reason}")]
    AuthorizationDenied { reason: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EcotrackError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

pub type EcotrackResult<T> = Result<T, EcotrackError>;
