use serde::{Deserialize, Serialize};

/// Body of `PATCH /api/orders/bulk-status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkStatusRequest {
    pub order_ids: Vec<i64>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusResponse {
    #[serde(default)]
    pub message: String,
    pub updated_count: u64,
    #[serde(default)]
    pub new_status: String,
}
