pub mod api;
pub mod form;
pub mod input;
pub mod ui;
pub mod workflow;
