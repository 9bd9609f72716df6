//! CSV exports, UTF-8 with a byte-order mark so spreadsheet applications
//! pick up the Arabic text correctly.

use chrono::NaiveDate;

use crate::model::{KpiRecord, Product};
use crate::stats::DashboardStats;

const BOM: char = '\u{feff}';

/// Quotes a field when it contains the delimiter, a quote or a line break;
/// internal quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Product register export, one row per product with localized status text.
pub fn products_csv(products: &[Product]) -> String {
    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(csv_row(&[
        "ID".to_string(),
        "اسم المنتج".to_string(),
        "المواصفات".to_string(),
        "العيوب".to_string(),
        "الحالة".to_string(),
        "رابط الصورة".to_string(),
    ]));

    for product in products {
        lines.push(csv_row(&[
            product.id.clone(),
            product.name.clone(),
            product.specs.clone(),
            product.defects.clone(),
            product.status.label().to_string(),
            product.image.clone(),
        ]));
    }

    format!("{}{}", BOM, lines.join("\n"))
}

/// The dashboard report: a summary block followed by a blank line and the
/// per-month KPI block.
pub fn dashboard_csv(stats: &DashboardStats, kpi: &[KpiRecord], date: NaiveDate) -> String {
    let mut lines = vec![
        csv_row(&["المقياس".to_string(), "القيمة".to_string()]),
        csv_row(&[
            "تقرير ملخص النظام".to_string(),
            date.format("%Y-%m-%d").to_string(),
        ]),
        csv_row(&[
            "إجمالي المنتجات".to_string(),
            stats.total_products.to_string(),
        ]),
        csv_row(&[
            "معدل المطابقة".to_string(),
            format!("{}%", stats.compliance_rate),
        ]),
        csv_row(&["المنتجات المعتمدة".to_string(), stats.approved.to_string()]),
        csv_row(&["المنتجات المرفوضة".to_string(), stats.rejected.to_string()]),
        csv_row(&["قيد الفحص".to_string(), stats.pending.to_string()]),
        String::new(),
        "تحليل مؤشرات الأداء".to_string(),
        csv_row(&[
            "الشهر".to_string(),
            "معدل الجودة (%)".to_string(),
            "عدد العيوب".to_string(),
        ]),
    ];

    for record in kpi {
        lines.push(csv_row(&[
            record.month.clone(),
            record.quality_rate.to_string(),
            record.defects.to_string(),
        ]));
    }

    format!("{}{}", BOM, lines.join("\n"))
}

pub fn products_export_file_name(date: NaiveDate) -> String {
    format!("products_export_{}.csv", date.format("%Y-%m-%d"))
}

pub fn dashboard_report_file_name(date: NaiveDate) -> String {
    format!("TQM_Dashboard_Report_{}.csv", date.format("%Y-%m-%d"))
}
