//! Storage layer errors

use thiserror::Error;

/// Errors that can occur in the storage layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Serialization error (writing line items to the document column)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error (reading a stored record back)
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(io_err) => StoreError::Connection(io_err.to_string()),
            sqlx::Error::PoolTimedOut => {
                StoreError::Connection("connection pool timed out".to_string())
            },
            sqlx::Error::PoolClosed => StoreError::Connection("connection pool closed".to_string()),
            _ => StoreError::Database(err.to_string()),
        }
    }
}
