use super::aggregate::Order;
use serde::{Deserialize, Serialize};

/// Query of `GET /api/orders`.
///
/// Blank filters are left out of the query string entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl OrderListQuery {
    pub const DEFAULT_PER_PAGE: u32 = 50;

    pub fn new(page: u32, per_page: u32, status: &str, category: &str) -> Self {
        Self {
            page: page.max(1),
            per_page,
            status: non_blank(status),
            category: non_blank(category),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One page of orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_dropped() {
        let query = OrderListQuery::new(3, 50, "  ", "");
        assert_eq!(query.status, None);
        assert_eq!(query.category, None);

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({ "page": 3, "per_page": 50 }));
    }

    #[test]
    fn page_is_at_least_one() {
        let query = OrderListQuery::new(0, 50, "Order Finished", "Books");
        assert_eq!(query.page, 1);
        assert_eq!(query.status.as_deref(), Some("Order Finished"));
        assert_eq!(query.category.as_deref(), Some("Books"));
    }

    #[test]
    fn decodes_empty_page() {
        let json = r#"{"orders": [], "total": 0, "page": 1, "per_page": 50, "total_pages": 0}"#;
        let page: OrderListResponse = serde_json::from_str(json).unwrap();
        assert!(page.orders.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
