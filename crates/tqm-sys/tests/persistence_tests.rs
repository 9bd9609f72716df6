//! Persistence properties: the durable snapshot mirrors the in-memory state
//! after every mutation, and loading never fails visibly.

mod common;

use common::{memory_store, product_draft};
use tempfile::TempDir;
use tqm_sys::model::{Department, ProductStatus};
use tqm_sys::storage::FileSlotStore;
use tqm_sys::store::{EmployeeDraft, RecordStore};

/// Reopens a store over the same slots and checks every collection matches
/// the live one.
fn assert_mirrored(live: &RecordStore, slots: &tqm_sys::storage::MemorySlotStore) {
    let reloaded = RecordStore::open(Box::new(slots.clone()));
    assert_eq!(reloaded.products(), live.products());
    assert_eq!(reloaded.team(), live.team());
    assert_eq!(reloaded.documents(), live.documents());
    assert_eq!(reloaded.kpi(), live.kpi());
}

#[test]
fn snapshot_tracks_every_mutation() {
    let (mut store, slots) = memory_store();

    let id = store.add_product(product_draft("Valve A", ProductStatus::Pending));
    assert_mirrored(&store, &slots);

    store.update_product(&id, product_draft("Valve A", ProductStatus::Approved));
    assert_mirrored(&store, &slots);

    store.add_employee(EmployeeDraft {
        name: "ليلى عمر".to_string(),
        role: "مفتش جودة".to_string(),
        department: Department::Qa,
        email: "l.omar@tqm-sys.com".to_string(),
        phone: "+966 50 333 4444".to_string(),
    });
    assert_mirrored(&store, &slots);

    store.remove_product(&id);
    assert_mirrored(&store, &slots);

    let mut record = store.kpi()[0].clone();
    record.month = "مارس".to_string();
    store.append_kpi(record);
    assert_mirrored(&store, &slots);

    store.reset();
    assert_mirrored(&store, &slots);
}

#[test]
fn last_write_wins_after_a_burst_of_mutations() {
    let (mut store, slots) = memory_store();

    for i in 0..20 {
        store.add_product(product_draft(&format!("دفعة {}", i), ProductStatus::Pending));
    }
    let id = store.products()[0].id.clone();
    store.remove_product(&id);

    assert_mirrored(&store, &slots);
}

#[test]
fn file_store_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let id = {
        let mut store = RecordStore::open(Box::new(FileSlotStore::new(temp_dir.path())));
        store.add_product(product_draft("مضخة مياه", ProductStatus::Approved))
    };

    let store = RecordStore::open(Box::new(FileSlotStore::new(temp_dir.path())));
    let product = store.products().iter().find(|p| p.id == id).unwrap();
    assert_eq!(product.name, "مضخة مياه");
    assert_eq!(product.status, ProductStatus::Approved);
}

#[test]
fn corrupt_slot_file_falls_back_to_seed_on_open() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("tqm_products.json"), "<<garbage>>").unwrap();

    let store = RecordStore::open(Box::new(FileSlotStore::new(temp_dir.path())));
    assert_eq!(store.products(), tqm_sys::seed::products().as_slice());
}

#[test]
fn first_open_uses_seed_data() {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::open(Box::new(FileSlotStore::new(temp_dir.path())));

    assert_eq!(store.products(), tqm_sys::seed::products().as_slice());
    assert_eq!(store.team(), tqm_sys::seed::team().as_slice());
    assert_eq!(store.documents(), tqm_sys::seed::documents().as_slice());
    assert_eq!(store.kpi(), tqm_sys::seed::kpi().as_slice());
}

#[test]
fn removing_an_unknown_id_changes_nothing() {
    let (mut store, slots) = memory_store();
    let team_before = store.team().to_vec();

    assert!(!store.remove_employee("975312468"));
    assert_eq!(store.team(), team_before.as_slice());
    assert_mirrored(&store, &slots);
}
