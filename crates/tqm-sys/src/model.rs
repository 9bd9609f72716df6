//! Record types for the four top-level collections.
//!
//! Field names serialize in camelCase so persisted slots and backup files
//! stay compatible with data exported by earlier versions of the app.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Approved,
    Rejected,
    Pending,
}

impl ProductStatus {
    /// Display label as shown in the UI and CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Approved => "معتمد",
            ProductStatus::Rejected => "مرفوض",
            ProductStatus::Pending => "قيد الفحص",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Management,
    Qc,
    Qa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Excel,
    Word,
}

impl DocumentKind {
    /// Infers the document kind from a file name, defaulting to Word for
    /// anything that is neither a PDF nor a spreadsheet.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if lower.ends_with(".xls") || lower.ends_with(".xlsx") {
            DocumentKind::Excel
        } else {
            DocumentKind::Word
        }
    }
}

/// A tracked product and its inspection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Immutable, unique within the collection.
    pub id: String,
    pub name: String,
    /// Free-text specification.
    pub specs: String,
    /// Free-text defect notes; empty when none were recorded.
    pub defects: String,
    pub status: ProductStatus,
    /// Image URL or embedded data URI.
    pub image: String,
}

/// A member of the quality team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: Department,
    /// Assigned when the record is created; never edited afterwards.
    pub joined_date: String,
    pub email: String,
    pub phone: String,
}

/// An archived document. The content URL may be an ephemeral object
/// reference that does not survive a restart; that is accepted behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Human-readable size, e.g. "2.5 MB".
    pub size: String,
    pub date: String,
    pub url: String,
}

/// One month of quality KPIs. Rows have no identifier; the sequence is an
/// append-only time series and duplicate month labels are preserved as
/// entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiRecord {
    pub month: String,
    pub quality_rate: f64,
    pub defects: u32,
    pub reserved_blow_pieces: u32,
    pub reserved_blow_weight: f64,
    pub reserved_injection_pieces: u32,
    pub reserved_injection_weight: f64,
    pub scrapped_pieces: u32,
    pub scrapped_weight: f64,
    pub ncr_shift1: u32,
    pub ncr_shift2: u32,
    pub ncr_shift3: u32,
    pub total_supplied: u32,
    pub total_returned: u32,
    pub total_complaints: u32,
}
