use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::config::AppConfig;
use contracts::usecases::u602_data_cleaning::{DuplicateScan, IncompleteScan, ValidationScan};

/// Проверки качества данных на стороне backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningCheck {
    Duplicates,
    Incomplete,
    Validation,
}

impl CleaningCheck {
    pub fn path(&self) -> &'static str {
        match self {
            CleaningCheck::Duplicates => "/api/data-cleaning/duplicates",
            CleaningCheck::Incomplete => "/api/data-cleaning/incomplete",
            CleaningCheck::Validation => "/api/data-cleaning/validate",
        }
    }

    pub fn failure_text(&self) -> &'static str {
        match self {
            CleaningCheck::Duplicates => "Error checking duplicates",
            CleaningCheck::Incomplete => "Error checking incomplete records",
            CleaningCheck::Validation => "Error validating data",
        }
    }
}

#[derive(Debug, Clone)]
pub enum CleaningResult {
    Duplicates(DuplicateScan),
    Incomplete(IncompleteScan),
    Validation(ValidationScan),
}

pub async fn run_check(
    config: &AppConfig,
    check: CleaningCheck,
) -> Result<CleaningResult, ApiError> {
    let url = config.api_url(check.path());
    Ok(match check {
        CleaningCheck::Duplicates => CleaningResult::Duplicates(get_json(&url).await?),
        CleaningCheck::Incomplete => CleaningResult::Incomplete(get_json(&url).await?),
        CleaningCheck::Validation => CleaningResult::Validation(get_json(&url).await?),
    })
}
