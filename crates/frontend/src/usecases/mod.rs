pub mod u601_data_quality;
pub mod u602_data_cleaning;
pub mod u603_export;
pub mod u604_powerbi_feeds;
