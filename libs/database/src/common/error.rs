/// Error type returned by every store.
///
/// Only [`DatabaseError::RowNotFound`] carries meaning for callers; every other
/// variant is an engine or infrastructure failure passed through untouched.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The lookup matched zero rows
    #[error("no rows in result set")]
    RowNotFound,

    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("{0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Generic store error (used by in-memory stores and tests)
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for store operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
