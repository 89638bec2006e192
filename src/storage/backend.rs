//! StorageBackend trait and error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing stored values.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The temp file could not be moved over the destination.
    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stored document could not be decoded.
    #[error("malformed data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A namespaced string key-value store.
///
/// Each namespace is an independent document. Reading a key that was never
/// written yields `Ok(None)`; only genuine failures are errors. A successful
/// `write` must be durable before it returns.
pub trait StorageBackend {
    /// Returns the value stored under `key` in `namespace`, if any.
    fn read(&self, namespace: &str, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key` in `namespace`, replacing any prior value.
    fn write(&mut self, namespace: &str, key: &str, value: &str) -> StorageResult<()>;
}
