//! Error types for Linkzo storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed (connection, I/O, constraint or decode).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store has been closed and accepts no more operations.
    #[error("store is closed")]
    Closed,
}

impl StoreError {
    /// Classify a raw `sqlx` error, separating shutdown from real failures.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed => Self::Closed,
            other => Self::Database(other),
        }
    }
}
