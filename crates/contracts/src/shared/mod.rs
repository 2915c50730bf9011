pub mod api_error;
pub mod wire;
