pub mod response;

pub use response::{is_complete, ColumnStatistics, DataQualityReport};
