//! Shared helpers for tqm-sys integration tests.

use tqm_sys::model::ProductStatus;
use tqm_sys::storage::MemorySlotStore;
use tqm_sys::store::{ProductDraft, RecordStore};

/// A record store over a fresh in-memory slot store, plus a handle sharing
/// the same slots so tests can observe what was persisted.
pub fn memory_store() -> (RecordStore, MemorySlotStore) {
    let slots = MemorySlotStore::new();
    let store = RecordStore::open(Box::new(slots.clone()));
    (store, slots)
}

pub fn product_draft(name: &str, status: ProductStatus) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        specs: "مواصفات اختبارية".to_string(),
        defects: String::new(),
        status,
        image: "https://example.com/p.jpg".to_string(),
    }
}
