//! Storage error types.
//!
//! Used by key-value backends, the product repository and callers of storage APIs.
//! Not-found is not an error here: repository lookups return `Option`/`bool`.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The value stored under `key` is not a valid product collection.
    #[error("Corrupt data under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A product that cannot be stored and read back.
    #[error("Invalid product '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Id generation exhausted after {0} attempts")]
    IdExhausted(usize),
}

pub type Result<T> = std::result::Result<T, StorageError>;
