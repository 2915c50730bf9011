use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::config::AppConfig;
use contracts::usecases::u601_data_quality::DataQualityReport;

pub async fn get_quality_report(config: &AppConfig) -> Result<DataQualityReport, ApiError> {
    get_json(&config.api_url("/api/data-quality/report")).await
}
