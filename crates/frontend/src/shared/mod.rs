pub mod alerts;
pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod feedback;
pub mod icons;
pub mod number_format;
pub mod request_sequence;
