use crate::enums::order_status::OrderStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /api/dashboard/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_orders: u64,
    /// Status text -> number of orders
    #[serde(default)]
    pub status_distribution: BTreeMap<String, u64>,
    /// Category -> number of orders
    #[serde(default)]
    pub category_distribution: BTreeMap<String, u64>,
    /// Category -> summed subtotal
    #[serde(default)]
    pub category_revenue: BTreeMap<String, f64>,
    /// Ordered by year ascending
    #[serde(default)]
    pub yearly_stats: Vec<YearlyStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyStat {
    pub year: i32,
    pub orders: u64,
    pub revenue: f64,
}

impl DashboardStats {
    /// Orders in the "Order Finished" status, zero when the status is absent
    pub fn completed_orders(&self) -> u64 {
        self.status_distribution
            .get(OrderStatus::Finished.code())
            .copied()
            .unwrap_or(0)
    }

    pub fn category_count(&self) -> usize {
        self.category_distribution.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_orders_default_to_zero() {
        let json = r#"{
            "total_orders": 10,
            "status_distribution": {"Order Returned": 4, "Order Cancelled": 6},
            "category_distribution": {"Books": 7, "Toys": 3},
            "category_revenue": {"Books": 700.0, "Toys": 30.5},
            "yearly_stats": [{"year": 2023, "orders": 10, "revenue": 730.5}]
        }"#;

        let stats: DashboardStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.completed_orders(), 0);
        assert_eq!(stats.category_count(), 2);
        assert_eq!(stats.yearly_stats[0].year, 2023);
    }

    #[test]
    fn completed_orders_read_finished_bucket() {
        let mut stats = DashboardStats::default();
        stats
            .status_distribution
            .insert("Order Finished".to_string(), 17);
        assert_eq!(stats.completed_orders(), 17);
    }
}
