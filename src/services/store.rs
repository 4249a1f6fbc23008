//! Culture Store
//!
//! Single-slot persistence for the active culture code, filling the role a
//! browser cookie plays on the web. Reads return `None` when the slot was
//! never written.

use crate::constants::STORE_FILE_NAME;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Contract for the persistent culture slot
pub trait CultureStore: Send + Sync {
    /// Read the stored culture code, `None` if never set
    fn get(&self) -> Option<String>;

    /// Overwrite the stored culture code
    fn set(&self, value: &str) -> Result<()>;
}

/// Volatile store for tests and short-lived embedding contexts
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a culture code
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(value.into())),
        }
    }
}

impl CultureStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().expect("store slot poisoned").clone()
    }

    fn set(&self, value: &str) -> Result<()> {
        *self.slot.lock().expect("store slot poisoned") = Some(value.to_string());
        Ok(())
    }
}

/// On-disk slot layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    current_culture: Option<String>,
}

/// TOML-file-backed store in the platform config directory
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store backed by `culture.toml` in the platform config dir
    pub fn in_config_dir() -> Result<Self> {
        Ok(Self::new(get_or_create_config_dir()?.join(STORE_FILE_NAME)))
    }

    fn load(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl CultureStore for FileStore {
    fn get(&self) -> Option<String> {
        match self.load() {
            Ok(file) => file.current_culture,
            Err(e) => {
                // Unreadable slot behaves like an unset one.
                warn!(error = %e, path = ?self.path, "Failed to read culture store");
                None
            }
        }
    }

    fn set(&self, value: &str) -> Result<()> {
        let file = StoreFile {
            current_culture: Some(value.to_string()),
        };
        fs::write(&self.path, toml::to_string(&file)?)?;
        debug!(path = ?self.path, value = %value, "Culture store updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(), None);

        store.set("he").expect("set");
        assert_eq!(store.get(), Some("he".to_string()));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("culture.toml"));

        assert_eq!(store.get(), None);
        store.set("ar").expect("set");
        assert_eq!(store.get(), Some("ar".to_string()));
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("culture.toml"));

        store.set("en").expect("set");
        store.set("zh").expect("set");
        assert_eq!(store.get(), Some("zh".to_string()));
    }

    #[test]
    fn test_file_store_garbage_reads_as_unset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("culture.toml");
        fs::write(&path, "not = [valid").expect("write");

        let store = FileStore::new(path);
        assert_eq!(store.get(), None);
    }
}
