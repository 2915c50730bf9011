use crate::enums::order_status::OrderStatus;
use crate::shared::wire;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order row as returned by `GET /api/orders` and `GET /api/orders/{id}`.
///
/// The id is assigned by the backend; the client never invents one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub customer_name: String,
    #[serde(deserialize_with = "wire::date")]
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub category: String,
    pub subcategory: String,
    pub quantity: i64,
    #[serde(deserialize_with = "wire::decimal")]
    pub subtotal_amount: f64,
    #[serde(deserialize_with = "wire::decimal")]
    pub tax_rate: f64,
    #[serde(deserialize_with = "wire::decimal")]
    pub shipping_cost: f64,
}

/// Body of `POST /api/orders` and `PUT /api/orders/{id}`.
///
/// The backend requires every field to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub category: String,
    pub subcategory: String,
    pub quantity: i64,
    pub subtotal_amount: f64,
    pub tax_rate: f64,
    pub shipping_cost: f64,
}

/// Success body of create, update and delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderMutationResponse {
    #[serde(default)]
    pub message: String,
    pub order_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_row_with_string_decimals() {
        let json = r#"{
            "order_id": 42,
            "status": "Order Returned",
            "customer_name": "Ana Torres",
            "order_date": "Fri, 15 Mar 2024 00:00:00 GMT",
            "quantity": 3,
            "subtotal_amount": "120.50",
            "tax_rate": "0.1600",
            "shipping_cost": 9.99,
            "category": "Electronics",
            "subcategory": "Audio"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.order_id, 42);
        assert_eq!(order.status, OrderStatus::Returned);
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(order.subtotal_amount, 120.5);
        assert_eq!(order.tax_rate, 0.16);
        assert_eq!(order.shipping_cost, 9.99);
    }

    #[test]
    fn payload_serializes_iso_date_and_status_text() {
        let payload = OrderPayload {
            customer_name: "Ana".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            status: OrderStatus::Finished,
            category: "Books".to_string(),
            subcategory: "Novel".to_string(),
            quantity: 1,
            subtotal_amount: 10.0,
            tax_rate: 0.16,
            shipping_cost: 0.0,
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["order_date"], "2024-01-02");
        assert_eq!(value["status"], "Order Finished");
        assert!(value.get("order_id").is_none());
    }
}
