//! Выгрузка заказов в CSV

use crate::shared::alerts::Severity;
use crate::shared::api_utils::{get_bytes, ApiError};
use crate::shared::config::AppConfig;
use crate::shared::export::FileSaver;
use crate::shared::feedback::UserFeedback;
use async_trait::async_trait;
use chrono::NaiveDate;

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

#[async_trait(?Send)]
pub trait CsvSource {
    async fn fetch_csv(&self) -> Result<Vec<u8>, ApiError>;
}

pub struct HttpCsvSource {
    config: AppConfig,
}

impl HttpCsvSource {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl CsvSource for HttpCsvSource {
    async fn fetch_csv(&self) -> Result<Vec<u8>, ApiError> {
        get_bytes(&self.config.api_url("/api/export/csv")).await
    }
}

/// `orders_export_YYYY-MM-DD.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("orders_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Download the CSV export. Nothing is saved unless the backend answered 2xx.
pub async fn export_orders_csv<S, W, F>(
    source: &S,
    saver: &W,
    feedback: &F,
    today: NaiveDate,
) -> bool
where
    S: CsvSource,
    W: FileSaver,
    F: UserFeedback,
{
    let bytes = match source.fetch_csv().await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Error exporting CSV: {}", e);
            feedback.notify("Error exporting CSV", Severity::Danger);
            return false;
        }
    };

    match saver.save(&bytes, &export_filename(today), CSV_MIME) {
        Ok(()) => {
            feedback.notify("CSV file downloaded successfully", Severity::Success);
            true
        }
        Err(e) => {
            log::error!("Error saving CSV: {}", e);
            feedback.notify("Error exporting CSV", Severity::Danger);
            false
        }
    }
}
