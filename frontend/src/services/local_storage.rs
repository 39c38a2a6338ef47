use skyway_backend::storage::{KeyValueStore, StorageError};
use web_sys::Storage;

/// `window.localStorage` as a cart persistence backend.
///
/// The storage handle is looked up on every call; private browsing modes and
/// sandboxed frames can deny access, which surfaces as
/// `StorageError::Unavailable` instead of a panic.
#[derive(Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // The browser rejects writes past its quota
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded { key: key.to_string() })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}
