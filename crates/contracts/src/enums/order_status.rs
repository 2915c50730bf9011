use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as stored by the backend.
///
/// The backend keeps the status as free text; the three values the dashboard
/// knows about get their own variants, anything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Finished,
    Returned,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Wire value of the status
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Finished => "Order Finished",
            OrderStatus::Returned => "Order Returned",
            OrderStatus::Cancelled => "Order Cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Bootstrap contextual colour used for the status badge.
    ///
    /// Unknown statuses are rendered as "secondary", never rejected.
    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::Finished => "success",
            OrderStatus::Returned => "warning",
            OrderStatus::Cancelled => "danger",
            OrderStatus::Other(_) => "secondary",
        }
    }

    /// Statuses offered in filter and edit selects
    pub fn known() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Finished,
            OrderStatus::Returned,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "Order Finished" => OrderStatus::Finished,
            "Order Returned" => OrderStatus::Returned,
            "Order Cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Finished
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        OrderStatus::from_code(&value)
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(raw) => raw,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_colors() {
        assert_eq!(OrderStatus::from_code("Order Finished").color(), "success");
        assert_eq!(OrderStatus::from_code("Order Returned").color(), "warning");
        assert_eq!(OrderStatus::from_code("Order Cancelled").color(), "danger");
    }

    #[test]
    fn unknown_statuses_are_secondary() {
        for raw in ["", "Pending", "order finished", "Order Finished ", "Shipped"] {
            let status = OrderStatus::from_code(raw);
            assert_eq!(status.color(), "secondary", "status {raw:?}");
        }
    }

    #[test]
    fn status_is_a_plain_json_string() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"Order Cancelled\"");

        let parsed: OrderStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(parsed, OrderStatus::Other("On Hold".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"On Hold\"");
    }
}
