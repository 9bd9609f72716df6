pub mod auth;
pub mod backup;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod store;

pub use auth::AuthGate;
pub use backup::{BackupDocument, ImportSummary};
pub use config::{AppConfig, DEFAULT_ADMIN_SECRET};
pub use error::{AuthError, BackupError, ConfigError, Result, StorageError, TqmError};
pub use model::{
    Department, DocumentFile, DocumentKind, Employee, KpiRecord, Product, ProductStatus,
};
pub use stats::DashboardStats;
pub use storage::{FileSlotStore, MemorySlotStore, SlotStore};
pub use store::{DocumentUpload, EmployeeDraft, ProductDraft, RecordStore};
