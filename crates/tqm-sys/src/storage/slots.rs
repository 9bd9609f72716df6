//! String-keyed durable slots.
//!
//! Each collection persists under a fixed key holding one JSON document.
//! `FileSlotStore` is the on-disk implementation (one file per key);
//! `MemorySlotStore` keeps everything in memory for tests and embedders
//! that want ephemeral state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::StorageError;

pub trait SlotStore {
    /// Returns the raw text stored under `key`, or `None` if the slot has
    /// never been written.
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the contents of the slot under `key`.
    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct FileSlotStore {
    directory: PathBuf,
}

impl FileSlotStore {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }

    fn ensure_directory(&self) -> Result<(), StorageError> {
        if !self.directory.exists() {
            std::fs::create_dir_all(&self.directory).map_err(|e| {
                StorageError::CreateDirectory {
                    path: self.directory.clone(),
                    source: e,
                }
            })?;
        }
        Ok(())
    }
}

impl SlotStore for FileSlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadSlot {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_directory()?;
        std::fs::write(self.slot_path(key), value).map_err(|e| StorageError::WriteSlot {
            key: key.to_string(),
            source: e,
        })
    }
}

/// In-memory slot store. Cloning shares the underlying map, so a clone can
/// observe writes made through the record store that owns the original.
#[derive(Clone, Default)]
pub struct MemorySlotStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_slot_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(temp_dir.path());

        assert!(store.read_slot("tqm_products").unwrap().is_none());

        store.write_slot("tqm_products", "[]").unwrap();
        assert_eq!(store.read_slot("tqm_products").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_file_slot_creates_directory_on_first_write() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data/tqm");
        let store = FileSlotStore::new(&nested);

        store.write_slot("tqm_team", "[]").unwrap();
        assert!(nested.join("tqm_team.json").exists());
    }

    #[test]
    fn test_file_slot_overwrite_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(temp_dir.path());

        store.write_slot("slot", "first").unwrap();
        store.write_slot("slot", "second").unwrap();
        assert_eq!(store.read_slot("slot").unwrap().unwrap(), "second");
    }

    #[test]
    fn test_memory_slot_clone_shares_state() {
        let store = MemorySlotStore::new();
        let view = store.clone();

        store.write_slot("k", "v").unwrap();
        assert_eq!(view.read_slot("k").unwrap().unwrap(), "v");
    }
}
