//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing durable storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store is not reachable in this context.
    #[error("Storage backend is unavailable")]
    Unavailable,

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store rejected the operation.
    #[error("Storage operation failed: {0}")]
    Backend(String),
}
