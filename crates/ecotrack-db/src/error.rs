//! Translation of driver errors into the [`StoreError`] taxonomy.

use ecotrack_core::error::StoreError;

/// Postgres SQLSTATE for a syntax error.
const SYNTAX_ERROR_CODE: &str = "42601";

/// Map a sqlx error to the store-error taxonomy instead of leaking
/// the driver type.
pub(crate) fn store_err(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) => match db.kind() {
            sqlx::error::ErrorKind::UniqueViolation => StoreError::UniqueViolation,
            sqlx::error::ErrorKind::ForeignKeyViolation => StoreError::ForeignKeyViolation,
            _ if db.code().as_deref() == Some(SYNTAX_ERROR_CODE) => {
                StoreError::Syntax(db.message().to_string())
            }
            _ => StoreError::Other(err.to_string()),
        },
        _ => StoreError::Other(err.to_string()),
    }
}
