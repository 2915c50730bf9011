use serde::{Deserialize, Serialize};

/// Response of `GET /api/data-cleaning/duplicates`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicateScan {
    pub total_records: u64,
    pub duplicates_found: u64,
    #[serde(default)]
    pub warnings: u64,
    #[serde(default)]
    pub summary: DuplicateSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicateSummary {
    /// Absent when the scan found nothing or the backend trimmed it
    #[serde(default)]
    pub duplicate_examples: Option<Vec<DuplicateExample>>,
}

/// Example row of a duplicate group. The date is kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateExample {
    pub order_id: i64,
    pub customer_name: String,
    pub order_date: String,
    pub category: String,
}

impl DuplicateScan {
    pub fn unique_records(&self) -> u64 {
        self.total_records.saturating_sub(self.duplicates_found)
    }
}

/// Response of `GET /api/data-cleaning/incomplete`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncompleteScan {
    pub total_records: u64,
    pub incomplete_records: u64,
    #[serde(default)]
    pub errors: u64,
    #[serde(default)]
    pub warnings: u64,
    #[serde(default)]
    pub summary: IncompleteSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncompleteSummary {
    #[serde(default)]
    pub problematic_order_ids: Option<Vec<i64>>,
}

impl IncompleteScan {
    pub fn valid_records(&self) -> u64 {
        self.total_records.saturating_sub(self.incomplete_records)
    }
}

/// Response of `GET /api/data-cleaning/validate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationScan {
    pub total_records: u64,
    #[serde(default)]
    pub errors: u64,
    #[serde(default)]
    pub warnings: u64,
    #[serde(default)]
    pub summary: ValidationSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    #[serde(default)]
    pub validation_issues: Option<Vec<String>>,
}

impl ValidationScan {
    pub fn valid_records(&self) -> u64 {
        self.total_records
            .saturating_sub(self.warnings)
            .saturating_sub(self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_examples_decode_as_none() {
        let json = r#"{"total_records": 10, "duplicates_found": 2, "warnings": 2, "summary": {"duplicates_found": 2}}"#;
        let scan: DuplicateScan = serde_json::from_str(json).unwrap();
        assert!(scan.summary.duplicate_examples.is_none());
        assert_eq!(scan.unique_records(), 8);
    }

    #[test]
    fn missing_summary_decodes_as_default() {
        let json = r#"{"total_records": 5, "incomplete_records": 1}"#;
        let scan: IncompleteScan = serde_json::from_str(json).unwrap();
        assert!(scan.summary.problematic_order_ids.is_none());
        assert_eq!(scan.valid_records(), 4);
    }

    #[test]
    fn valid_records_never_underflow() {
        let scan = ValidationScan {
            total_records: 3,
            errors: 2,
            warnings: 5,
            summary: ValidationSummary::default(),
        };
        assert_eq!(scan.valid_records(), 0);
    }
}
