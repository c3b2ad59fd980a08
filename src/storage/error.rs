//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key cannot be mapped onto the backing store
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Reading or writing the backing file failed
    #[error("Storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store refused the write
    #[error("Write to '{key}' rejected: {reason}")]
    WriteRejected { key: String, reason: String },

    /// Contacts could not be encoded
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Errors that can occur while loading the persisted contact list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A value is stored under the key but is not a contact list
    #[error("Stored value under '{key}' is not a valid contact list: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
