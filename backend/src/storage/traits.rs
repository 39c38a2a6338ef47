//! # Storage Traits
//!
//! The key-value abstraction the persistence adapter writes through. Browser
//! localStorage, a directory of JSON files and an in-memory map all implement
//! it, so the domain never knows which one is in use.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend is unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// String-keyed, string-valued storage with browser localStorage semantics.
///
/// Methods take `&self`; implementations use interior mutability or an
/// ambient backend, matching how the browser exposes its storage.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting an absent key succeeds
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
