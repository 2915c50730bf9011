use super::input::InputError;
use crate::shared::date_utils::to_input_value;
use contracts::domain::a001_order::{Order, OrderPayload};
use contracts::enums::order_status::OrderStatus;
use contracts::shared::wire::parse_date;
use std::str::FromStr;

/// Raw text of the create/edit form, exactly as typed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderForm {
    pub customer_name: String,
    pub order_date: String,
    pub status: String,
    pub category: String,
    pub subcategory: String,
    pub quantity: String,
    pub subtotal_amount: String,
    pub tax_rate: String,
    pub shipping_cost: String,
}

impl OrderForm {
    /// Empty create form dated `today`
    pub fn for_date(today: chrono::NaiveDate) -> Self {
        Self {
            order_date: to_input_value(today),
            status: OrderStatus::Finished.code().to_string(),
            ..Self::default()
        }
    }

    pub fn from_order(order: &Order) -> Self {
        Self {
            customer_name: order.customer_name.clone(),
            order_date: to_input_value(order.order_date),
            status: order.status.code().to_string(),
            category: order.category.clone(),
            subcategory: order.subcategory.clone(),
            quantity: order.quantity.to_string(),
            subtotal_amount: order.subtotal_amount.to_string(),
            tax_rate: order.tax_rate.to_string(),
            shipping_cost: order.shipping_cost.to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<OrderPayload, InputError> {
        let order_date = parse_date(self.order_date.trim()).ok_or(InputError::InvalidField {
            field: "order date",
        })?;
        let quantity: i64 = number(&self.quantity, "quantity")?;
        if quantity < 0 {
            return Err(InputError::InvalidField { field: "quantity" });
        }

        Ok(OrderPayload {
            customer_name: self.customer_name.trim().to_string(),
            order_date,
            status: OrderStatus::from(self.status.clone()),
            category: self.category.trim().to_string(),
            subcategory: self.subcategory.trim().to_string(),
            quantity,
            subtotal_amount: number(&self.subtotal_amount, "subtotal")?,
            tax_rate: number(&self.tax_rate, "tax rate")?,
            shipping_cost: number(&self.shipping_cost, "shipping cost")?,
        })
    }
}

fn number<T: FromStr>(raw: &str, field: &'static str) -> Result<T, InputError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| InputError::InvalidField { field })
}
