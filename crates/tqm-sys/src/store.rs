//! The record store: four independent collections mirrored to durable slots.
//!
//! Every successful mutation flushes the affected collection through the
//! persistence bridge. Flushing is best effort: a write failure is logged
//! and swallowed, it never fails the in-memory mutation (callers must not
//! assume a mutation implies a durable flush).

use chrono::Utc;

use crate::model::{
    Department, DocumentFile, DocumentKind, Employee, KpiRecord, Product, ProductStatus,
};
use crate::storage::{bridge, FileSlotStore, SlotStore};
use crate::{config::AppConfig, seed};

pub const PRODUCTS_KEY: &str = "tqm_products";
pub const TEAM_KEY: &str = "tqm_team";
pub const DOCUMENTS_KEY: &str = "tqm_documents";
pub const KPI_KEY: &str = "tqm_kpiData";

/// Fallback image applied when a product is added without one.
const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=800&auto=format&fit=crop&q=60";

// ─── Operation inputs ───────────────────────────────────────────────────────

/// Fields of a product except its identifier, which the store assigns on add
/// and preserves on update.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub specs: String,
    pub defects: String,
    pub status: ProductStatus,
    pub image: String,
}

/// Fields of an employee the add/edit forms expose. The join date is set by
/// the store at creation time and kept on update.
#[derive(Debug, Clone)]
pub struct EmployeeDraft {
    pub name: String,
    pub role: String,
    pub department: Department,
    pub email: String,
    pub phone: String,
}

/// Metadata of an uploaded file. Kind, size string and date are derived by
/// the store.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub byte_len: u64,
    /// Content reference; typically an ephemeral object URL.
    pub url: String,
}

// ─── RecordStore ────────────────────────────────────────────────────────────

pub struct RecordStore {
    slots: Box<dyn SlotStore>,
    products: Vec<Product>,
    team: Vec<Employee>,
    documents: Vec<DocumentFile>,
    kpi: Vec<KpiRecord>,
}

impl RecordStore {
    /// Loads all four collections from the given slot store, falling back to
    /// seed data per collection where nothing usable is persisted.
    pub fn open(slots: Box<dyn SlotStore>) -> Self {
        let products = bridge::load_collection(slots.as_ref(), PRODUCTS_KEY, seed::products);
        let team = bridge::load_collection(slots.as_ref(), TEAM_KEY, seed::team);
        let documents = bridge::load_collection(slots.as_ref(), DOCUMENTS_KEY, seed::documents);
        let kpi = bridge::load_collection(slots.as_ref(), KPI_KEY, seed::kpi);

        Self {
            slots,
            products,
            team,
            documents,
            kpi,
        }
    }

    /// Opens a store backed by files in the configured data directory.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::open(Box::new(FileSlotStore::new(&config.data_dir)))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn team(&self) -> &[Employee] {
        &self.team
    }

    pub fn documents(&self) -> &[DocumentFile] {
        &self.documents
    }

    pub fn kpi(&self) -> &[KpiRecord] {
        &self.kpi
    }

    // ─── Products ───────────────────────────────────────────────────────────

    /// Adds a product at the front of the collection and returns its
    /// generated identifier.
    pub fn add_product(&mut self, draft: ProductDraft) -> String {
        let id = generate_id(|candidate| self.products.iter().any(|p| p.id == candidate));
        let image = if draft.image.is_empty() {
            DEFAULT_PRODUCT_IMAGE.to_string()
        } else {
            draft.image
        };

        self.products.insert(
            0,
            Product {
                id: id.clone(),
                name: draft.name,
                specs: draft.specs,
                defects: draft.defects,
                status: draft.status,
                image,
            },
        );
        self.flush_products();
        id
    }

    /// Replaces the fields of the product with the given identifier, keeping
    /// the identifier itself. Returns `false` (and changes nothing) if no
    /// such product exists.
    pub fn update_product(&mut self, id: &str, draft: ProductDraft) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        product.name = draft.name;
        product.specs = draft.specs;
        product.defects = draft.defects;
        product.status = draft.status;
        product.image = draft.image;
        self.flush_products();
        true
    }

    pub fn remove_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return false;
        }
        self.flush_products();
        true
    }

    // ─── Team ───────────────────────────────────────────────────────────────

    pub fn add_employee(&mut self, draft: EmployeeDraft) -> String {
        let id = generate_id(|candidate| self.team.iter().any(|m| m.id == candidate));
        self.team.insert(
            0,
            Employee {
                id: id.clone(),
                name: draft.name,
                role: draft.role,
                department: draft.department,
                joined_date: today(),
                email: draft.email,
                phone: draft.phone,
            },
        );
        self.flush_team();
        id
    }

    /// The join date is fixed at creation and survives edits.
    pub fn update_employee(&mut self, id: &str, draft: EmployeeDraft) -> bool {
        let Some(member) = self.team.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        member.name = draft.name;
        member.role = draft.role;
        member.department = draft.department;
        member.email = draft.email;
        member.phone = draft.phone;
        self.flush_team();
        true
    }

    pub fn remove_employee(&mut self, id: &str) -> bool {
        let before = self.team.len();
        self.team.retain(|m| m.id != id);
        if self.team.len() == before {
            return false;
        }
        self.flush_team();
        true
    }

    // ─── Documents ──────────────────────────────────────────────────────────

    pub fn add_document(&mut self, upload: DocumentUpload) -> String {
        let id = generate_id(|candidate| self.documents.iter().any(|d| d.id == candidate));
        let kind = DocumentKind::from_file_name(&upload.file_name);
        let size = format_size(upload.byte_len);

        self.documents.insert(
            0,
            DocumentFile {
                id: id.clone(),
                name: upload.file_name,
                kind,
                size,
                date: today(),
                url: upload.url,
            },
        );
        self.flush_documents();
        id
    }

    /// Renames a document. Size, date and content reference describe the
    /// original upload and are not editable.
    pub fn update_document(&mut self, id: &str, name: String) -> bool {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        doc.kind = DocumentKind::from_file_name(&name);
        doc.name = name;
        self.flush_documents();
        true
    }

    pub fn remove_document(&mut self, id: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() == before {
            return false;
        }
        self.flush_documents();
        true
    }

    // ─── KPI ────────────────────────────────────────────────────────────────

    /// Appends one month of KPIs. The sequence is an append-only time series;
    /// rows are never edited or removed and duplicate month labels are kept.
    pub fn append_kpi(&mut self, record: KpiRecord) {
        self.kpi.push(record);
        self.flush_kpi();
    }

    // ─── Bulk operations ────────────────────────────────────────────────────

    /// Restores all four collections to their seed contents. This is a
    /// mutating action; the embedding shell must route it through the auth
    /// gate like any other write.
    pub fn reset(&mut self) {
        self.products = seed::products();
        self.team = seed::team();
        self.documents = seed::documents();
        self.kpi = seed::kpi();
        self.flush_products();
        self.flush_team();
        self.flush_documents();
        self.flush_kpi();
    }

    pub(crate) fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.flush_products();
    }

    pub(crate) fn replace_team(&mut self, team: Vec<Employee>) {
        self.team = team;
        self.flush_team();
    }

    pub(crate) fn replace_documents(&mut self, documents: Vec<DocumentFile>) {
        self.documents = documents;
        self.flush_documents();
    }

    pub(crate) fn replace_kpi(&mut self, kpi: Vec<KpiRecord>) {
        self.kpi = kpi;
        self.flush_kpi();
    }

    // ─── Flushing ───────────────────────────────────────────────────────────

    fn flush_products(&self) {
        self.flush(PRODUCTS_KEY, &self.products);
    }

    fn flush_team(&self) {
        self.flush(TEAM_KEY, &self.team);
    }

    fn flush_documents(&self) {
        self.flush(DOCUMENTS_KEY, &self.documents);
    }

    fn flush_kpi(&self) {
        self.flush(KPI_KEY, &self.kpi);
    }

    fn flush<T: serde::Serialize>(&self, key: &str, records: &[T]) {
        if let Err(e) = bridge::save_collection(self.slots.as_ref(), key, records) {
            log::warn!("Failed to flush '{}', in-memory state kept: {}", key, e);
        }
    }
}

/// Wall-clock identifier in the historical format (milliseconds since the
/// epoch, decimal). Bumped past any value already taken so two adds within
/// the same millisecond still get distinct ids.
fn generate_id<F: Fn(&str) -> bool>(taken: F) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !taken(&id) {
            return id;
        }
        candidate += 1;
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

fn format_size(byte_len: u64) -> String {
    format!("{:.2} MB", byte_len as f64 / 1024.0 / 1024.0)
}
