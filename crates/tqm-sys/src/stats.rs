//! Dashboard summary figures derived from the product collection.

use crate::model::ProductStatus;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
    /// Approved share of all products, in whole percent. Zero for an empty
    /// collection.
    pub compliance_rate: u32,
}

impl DashboardStats {
    pub fn collect(store: &RecordStore) -> Self {
        let products = store.products();
        let approved = products
            .iter()
            .filter(|p| p.status == ProductStatus::Approved)
            .count();
        let rejected = products
            .iter()
            .filter(|p| p.status == ProductStatus::Rejected)
            .count();
        let pending = products
            .iter()
            .filter(|p| p.status == ProductStatus::Pending)
            .count();

        let compliance_rate = if products.is_empty() {
            0
        } else {
            (approved as f64 / products.len() as f64 * 100.0).round() as u32
        };

        Self {
            total_products: products.len(),
            approved,
            rejected,
            pending,
            compliance_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlotStore;

    #[test]
    fn test_collect_over_seed_data() {
        let store = RecordStore::open(Box::new(MemorySlotStore::new()));
        let stats = DashboardStats::collect(&store);

        // Seed data: 4 products, 2 approved, 1 rejected, 1 pending.
        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.compliance_rate, 50);
    }

    #[test]
    fn test_empty_collection_has_zero_rate() {
        let mut store = RecordStore::open(Box::new(MemorySlotStore::new()));
        crate::backup::import(&mut store, r#"{"products": [], "team": []}"#).unwrap();

        let stats = DashboardStats::collect(&store);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.compliance_rate, 0);
    }
}
