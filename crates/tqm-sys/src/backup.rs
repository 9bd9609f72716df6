//! Full-database backup and restore as one JSON document.
//!
//! A backup holds the four collections under their historical field names.
//! Import validates up front (a usable backup must carry at least products
//! and team) and then applies whichever collections are present, leaving the
//! rest untouched. Validation is all-or-nothing; application is per field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BackupError;
use crate::model::{DocumentFile, Employee, KpiRecord, Product};
use crate::store::RecordStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<Employee>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<DocumentFile>>,
    #[serde(default, rename = "kpiData", skip_serializing_if = "Option::is_none")]
    pub kpi_data: Option<Vec<KpiRecord>>,
}

/// Which collections an import replaced; the shell's success messaging
/// reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub products: bool,
    pub team: bool,
    pub documents: bool,
    pub kpi_data: bool,
}

/// Serializes all four collections as a pretty-printed backup document.
pub fn export(store: &RecordStore) -> String {
    let document = BackupDocument {
        products: Some(store.products().to_vec()),
        team: Some(store.team().to_vec()),
        documents: Some(store.documents().to_vec()),
        kpi_data: Some(store.kpi().to_vec()),
    };
    // A backup document of plain records cannot fail to serialize.
    serde_json::to_string_pretty(&document).unwrap_or_default()
}

/// Parses and validates a backup document without touching any state.
pub fn parse(raw: &str) -> Result<BackupDocument, BackupError> {
    let document: BackupDocument = serde_json::from_str(raw)?;
    if document.products.is_none() || document.team.is_none() {
        return Err(BackupError::MissingCollections);
    }
    Ok(document)
}

/// Restores a backup into the store. On any parse or validation failure no
/// collection is modified; on success each collection present in the file
/// replaces its counterpart and absent collections are left alone.
pub fn import(store: &mut RecordStore, raw: &str) -> Result<ImportSummary, BackupError> {
    let document = parse(raw)?;

    let summary = ImportSummary {
        products: document.products.is_some(),
        team: document.team.is_some(),
        documents: document.documents.is_some(),
        kpi_data: document.kpi_data.is_some(),
    };

    if let Some(products) = document.products {
        store.replace_products(products);
    }
    if let Some(team) = document.team {
        store.replace_team(team);
    }
    if let Some(documents) = document.documents {
        store.replace_documents(documents);
    }
    if let Some(kpi) = document.kpi_data {
        store.replace_kpi(kpi);
    }

    Ok(summary)
}

/// Suggested download name for a backup taken on `date`, e.g.
/// `tqm_backup_2026-08-23.json`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("tqm_backup_{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlotStore;

    fn memory_store() -> RecordStore {
        RecordStore::open(Box::new(MemorySlotStore::new()))
    }

    #[test]
    fn test_round_trip_preserves_store() {
        let mut store = memory_store();
        let exported = export(&store);

        let summary = import(&mut store, &exported).unwrap();
        assert!(summary.products && summary.team && summary.documents && summary.kpi_data);

        assert_eq!(export(&store), exported);
    }

    #[test]
    fn test_import_rejects_missing_team() {
        let mut store = memory_store();
        let snapshot = store.products().to_vec();

        let result = import(&mut store, r#"{"products": []}"#);
        assert!(matches!(result, Err(BackupError::MissingCollections)));
        assert_eq!(store.products(), snapshot.as_slice());
    }

    #[test]
    fn test_import_rejects_missing_products() {
        let mut store = memory_store();
        let result = import(&mut store, r#"{"team": []}"#);
        assert!(matches!(result, Err(BackupError::MissingCollections)));
    }

    #[test]
    fn test_import_rejects_unparseable_input_without_mutation() {
        let mut store = memory_store();
        let team_before = store.team().to_vec();

        assert!(matches!(
            import(&mut store, "{ truncated"),
            Err(BackupError::Parse(_))
        ));
        assert_eq!(store.team(), team_before.as_slice());
    }

    #[test]
    fn test_import_applies_only_present_collections() {
        let mut store = memory_store();
        let documents_before = store.documents().to_vec();
        let kpi_before = store.kpi().to_vec();

        let summary = import(&mut store, r#"{"products": [], "team": []}"#).unwrap();

        assert!(summary.products && summary.team);
        assert!(!summary.documents && !summary.kpi_data);
        assert!(store.products().is_empty());
        assert!(store.team().is_empty());
        assert_eq!(store.documents(), documents_before.as_slice());
        assert_eq!(store.kpi(), kpi_before.as_slice());
    }

    #[test]
    fn test_import_ignores_unknown_fields() {
        let mut store = memory_store();
        let summary = import(
            &mut store,
            r#"{"products": [], "team": [], "exportedBy": "tqm-sys", "schemaVersion": 2}"#,
        )
        .unwrap();
        assert!(summary.products && summary.team);
    }

    #[test]
    fn test_backup_file_name_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(backup_file_name(date), "tqm_backup_2026-08-23.json");
    }
}
