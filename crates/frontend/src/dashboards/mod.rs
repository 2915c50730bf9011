pub mod d400_order_overview;

pub use d400_order_overview::ui::OrderOverviewDashboard;
