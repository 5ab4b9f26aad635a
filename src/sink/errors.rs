//! # Storage Errors

use thiserror::Error;

/// Result type for sink operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage sink errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Sink cannot accept writes
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Driver-level failure (connection, auth, write concern, ...)
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
