use crate::shared::api_utils::{delete_json, get_json, patch_json, post_json, put_json, ApiError};
use crate::shared::config::AppConfig;
use async_trait::async_trait;
use contracts::domain::a001_order::{
    BulkStatusRequest, BulkStatusResponse, Order, OrderListQuery, OrderListResponse,
    OrderMutationResponse, OrderPayload,
};

/// Orders resource of the REST backend
#[async_trait(?Send)]
pub trait OrdersApi {
    async fn list(&self, query: &OrderListQuery) -> Result<OrderListResponse, ApiError>;
    async fn get(&self, order_id: i64) -> Result<Order, ApiError>;
    async fn create(&self, payload: &OrderPayload) -> Result<OrderMutationResponse, ApiError>;
    async fn update(
        &self,
        order_id: i64,
        payload: &OrderPayload,
    ) -> Result<OrderMutationResponse, ApiError>;
    async fn delete(&self, order_id: i64) -> Result<OrderMutationResponse, ApiError>;
    async fn bulk_status(
        &self,
        request: &BulkStatusRequest,
    ) -> Result<BulkStatusResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpOrdersApi {
    config: AppConfig,
}

impl HttpOrdersApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn order_url(&self, order_id: i64) -> String {
        self.config.api_url(&format!("/api/orders/{}", order_id))
    }
}

/// `/api/orders?page=..&per_page=..[&status=..][&category=..]`
pub fn list_url(config: &AppConfig, query: &OrderListQuery) -> String {
    let qs = serde_qs::to_string(query).unwrap_or_default();
    config.api_url(&format!("/api/orders?{}", qs))
}

#[async_trait(?Send)]
impl OrdersApi for HttpOrdersApi {
    async fn list(&self, query: &OrderListQuery) -> Result<OrderListResponse, ApiError> {
        get_json(&list_url(&self.config, query)).await
    }

    async fn get(&self, order_id: i64) -> Result<Order, ApiError> {
        get_json(&self.order_url(order_id)).await
    }

    async fn create(&self, payload: &OrderPayload) -> Result<OrderMutationResponse, ApiError> {
        post_json(&self.config.api_url("/api/orders"), payload).await
    }

    async fn update(
        &self,
        order_id: i64,
        payload: &OrderPayload,
    ) -> Result<OrderMutationResponse, ApiError> {
        put_json(&self.order_url(order_id), payload).await
    }

    async fn delete(&self, order_id: i64) -> Result<OrderMutationResponse, ApiError> {
        delete_json(&self.order_url(order_id)).await
    }

    async fn bulk_status(
        &self,
        request: &BulkStatusRequest,
    ) -> Result<BulkStatusResponse, ApiError> {
        patch_json(&self.config.api_url("/api/orders/bulk-status"), request).await
    }
}
