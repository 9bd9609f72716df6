//! Load/save of whole collections through a slot store.
//!
//! Loading fails closed: an absent or unparseable slot yields the seed
//! sequence so the application always starts, even over corrupt state.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::storage::SlotStore;

pub fn load_collection<T, F>(slots: &dyn SlotStore, key: &str, seed: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let raw = match slots.read_slot(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return seed(),
        Err(e) => {
            log::warn!("Failed to read slot '{}', using seed data: {}", key, e);
            return seed();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Slot '{}' holds unparseable data, using seed data: {}", key, e);
            seed()
        }
    }
}

pub fn save_collection<T: Serialize>(
    slots: &dyn SlotStore,
    key: &str,
    records: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(records).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        source: e,
    })?;
    slots.write_slot(key, &raw)
}
