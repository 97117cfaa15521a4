// error.rs — Error types for the goal store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during goal store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize the goal document.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A numeric target was not a finite number.
    #[error("invalid {field} for goal '{name}': must be a finite number")]
    InvalidTarget { name: String, field: &'static str },
}
