//! Built-in seed dataset.
//!
//! Used whenever a collection has no persisted state (first run) or its
//! persisted state cannot be parsed, and by the factory-reset operation.

use crate::model::{
    Department, DocumentFile, DocumentKind, Employee, KpiRecord, Product, ProductStatus,
};

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "محرك كهربائي X500".to_string(),
            specs: "5000 RPM, 220V, عزل حراري".to_string(),
            defects: String::new(),
            status: ProductStatus::Approved,
            image: "https://images.unsplash.com/photo-1562259920-47afc305f369?w=800&auto=format&fit=crop".to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "لوحة تحكم صناعية".to_string(),
            specs: "IP65, شاشة لمس 7 بوصة".to_string(),
            defects: "خدش في الإطار الخارجي".to_string(),
            status: ProductStatus::Rejected,
            image: "https://images.unsplash.com/photo-1555664424-778a69032054?w=800&auto=format&fit=crop".to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "مستشعر حرارة دقيق".to_string(),
            specs: "نطاق -50 إلى 500 درجة".to_string(),
            defects: String::new(),
            status: ProductStatus::Pending,
            image: "https://images.unsplash.com/photo-1581092160562-40aa08e78837?w=800&auto=format&fit=crop".to_string(),
        },
        Product {
            id: "4".to_string(),
            name: "صمام هيدروليكي".to_string(),
            specs: "ضغط عالي 300 بار".to_string(),
            defects: String::new(),
            status: ProductStatus::Approved,
            image: "https://images.unsplash.com/photo-1532187643603-ba119ca4109e?w=800&auto=format&fit=crop".to_string(),
        },
    ]
}

pub fn team() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".to_string(),
            name: "محمد علي".to_string(),
            role: "مدير الجودة".to_string(),
            department: Department::Management,
            joined_date: "2023-01-15".to_string(),
            email: "m.ali@tqm-sys.com".to_string(),
            phone: "+966 50 123 4567".to_string(),
        },
        Employee {
            id: "2".to_string(),
            name: "سارة خالد".to_string(),
            role: "مراقب جودة أول".to_string(),
            department: Department::Qc,
            joined_date: "2023-03-10".to_string(),
            email: "s.khaled@tqm-sys.com".to_string(),
            phone: "+966 55 987 6543".to_string(),
        },
        Employee {
            id: "3".to_string(),
            name: "أحمد حسن".to_string(),
            role: "أخصائي توكيد جودة".to_string(),
            department: Department::Qa,
            joined_date: "2023-06-20".to_string(),
            email: "a.hassan@tqm-sys.com".to_string(),
            phone: "+966 54 111 2222".to_string(),
        },
    ]
}

pub fn documents() -> Vec<DocumentFile> {
    vec![
        DocumentFile {
            id: "1".to_string(),
            name: "دليل معايير ISO 9001".to_string(),
            kind: DocumentKind::Pdf,
            size: "2.5 MB".to_string(),
            date: "2024-01-10".to_string(),
            // Placeholder URL marking seed documents that have no real content.
            url: "#".to_string(),
        },
        DocumentFile {
            id: "2".to_string(),
            name: "تقرير التدقيق الداخلي Q1".to_string(),
            kind: DocumentKind::Excel,
            size: "1.1 MB".to_string(),
            date: "2024-04-05".to_string(),
            url: "#".to_string(),
        },
    ]
}

pub fn kpi() -> Vec<KpiRecord> {
    vec![
        KpiRecord {
            month: "يناير".to_string(),
            quality_rate: 92.0,
            defects: 12,
            reserved_blow_pieces: 450,
            reserved_blow_weight: 112.5,
            reserved_injection_pieces: 320,
            reserved_injection_weight: 64.0,
            scrapped_pieces: 85,
            scrapped_weight: 21.2,
            ncr_shift1: 2,
            ncr_shift2: 4,
            ncr_shift3: 1,
            total_supplied: 15000,
            total_returned: 150,
            total_complaints: 3,
        },
        KpiRecord {
            month: "فبراير".to_string(),
            quality_rate: 94.0,
            defects: 8,
            reserved_blow_pieces: 380,
            reserved_blow_weight: 95.0,
            reserved_injection_pieces: 210,
            reserved_injection_weight: 42.0,
            scrapped_pieces: 60,
            scrapped_weight: 15.0,
            ncr_shift1: 1,
            ncr_shift2: 2,
            ncr_shift3: 2,
            total_supplied: 18000,
            total_returned: 110,
            total_complaints: 1,
        },
    ]
}
