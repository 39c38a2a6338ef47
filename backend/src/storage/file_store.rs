//! # File Store
//!
//! Native key-value backend: one JSON file per key inside a data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── skyway_travels_cart_v1.json
//! └── skyway_travels_discount_v1.json
//! ```
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! never leaves a half-written record behind.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::{KeyValueStore, StorageError};

#[derive(Debug, Clone)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created cart data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Keys are mapped to safe file names; anything outside `[A-Za-z0-9_.-]`
    /// becomes `_`
    fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') { c } else { '_' })
            .collect();
        self.base_directory.join(format!("{}.json", file_stem))
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value).with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path).with_context(|| format!("Failed to replace {}", path.display()))?;
        debug!("Saved {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {}", path.display())),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.write(key, value)?)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Ok(self.delete(key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.get("cart").unwrap(), None);
        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("cart.json").exists());
        assert!(!temp_dir.path().join("cart.tmp").exists());

        store.remove("cart").unwrap();
        store.remove("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileStore::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(store.base_directory(), nested.as_path());
    }

    #[test]
    fn test_unsafe_keys_stay_inside_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();
        store.set("../escape/key", "1").unwrap();
        assert!(temp_dir.path().join(".._escape_key.json").exists());
    }
}
