//! Database error type

/// Errors from the data-access layer
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("unsupported database backend: {0}")]
    UnsupportedBackend(String),
}
