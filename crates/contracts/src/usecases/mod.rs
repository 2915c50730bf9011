pub mod u601_data_quality;
pub mod u602_data_cleaning;
