pub mod list;
pub mod manage;

pub use list::OrdersList;
pub use manage::OrderManagement;
