pub mod aggregate;
pub mod bulk;
pub mod list;

pub use aggregate::{Order, OrderMutationResponse, OrderPayload};
pub use bulk::{BulkStatusRequest, BulkStatusResponse};
pub use list::{OrderListQuery, OrderListResponse};
