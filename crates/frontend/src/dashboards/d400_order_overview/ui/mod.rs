mod dashboard;

pub use dashboard::{OrderOverviewDashboard, DUPLICATES_PLACEHOLDER};
