//! Разбор пользовательского ввода до обращения к backend

use thiserror::Error;

/// Client-side input failure. Shown as a warning; no request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Search for an order first")]
    NoEditingSession,
    #[error("Please enter an order ID")]
    MissingOrderId,
    #[error("Order ID must be a number")]
    InvalidOrderId,
    #[error("Please enter the order IDs")]
    MissingBulkIds,
    #[error("No valid order IDs found")]
    NoValidBulkIds,
    #[error("Invalid value for {field}")]
    InvalidField { field: &'static str },
}

pub fn parse_order_id(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingOrderId);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::InvalidOrderId)
}

/// Comma separated ids; tokens that are not integers are skipped.
/// Order and repeats are kept as typed.
pub fn parse_bulk_ids(raw: &str) -> Result<Vec<i64>, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::MissingBulkIds);
    }
    let ids: Vec<i64> = raw
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect();
    if ids.is_empty() {
        return Err(InputError::NoValidBulkIds);
    }
    Ok(ids)
}
