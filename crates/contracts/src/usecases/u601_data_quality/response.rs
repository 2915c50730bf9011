use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /api/data-quality/report`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataQualityReport {
    pub total_records: u64,
    pub total_columns: u32,
    pub duplicate_records: u64,
    /// Column -> percentage of non-null values (0..=100)
    #[serde(default)]
    pub data_completeness: BTreeMap<String, f64>,
    /// Column -> number of missing values
    #[serde(default)]
    pub null_values: BTreeMap<String, u64>,
    /// Numeric columns only
    #[serde(default)]
    pub basic_statistics: BTreeMap<String, ColumnStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub count: u64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl DataQualityReport {
    /// Columns that have at least one missing value
    pub fn columns_with_nulls(&self) -> Vec<(&str, u64)> {
        self.null_values
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(column, count)| (column.as_str(), *count))
            .collect()
    }
}

/// A column counts as complete only at exactly 100 percent
pub fn is_complete(percentage: f64) -> bool {
    percentage >= 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_report() {
        let json = r#"{
            "total_records": 1000,
            "total_columns": 10,
            "duplicate_records": 2,
            "data_completeness": {"order_id": 100.0, "customer_name": 99.5}
        }"#;

        let report: DataQualityReport = serde_json::from_str(json).unwrap();

        assert_eq!(report.total_records, 1000);
        assert!(report.null_values.is_empty());
        assert!(is_complete(report.data_completeness["order_id"]));
        assert!(!is_complete(report.data_completeness["customer_name"]));
        assert!(report.basic_statistics.is_empty());
    }

    #[test]
    fn only_columns_with_missing_values_are_listed() {
        let json = r#"{
            "total_records": 10,
            "total_columns": 3,
            "duplicate_records": 0,
            "null_values": {"category": 0, "customer_name": 2, "tax_rate": 1},
            "value_distributions": {"status": {"Order Finished": 10}},
            "basic_statistics": {"quantity": {"count": 10, "mean": 2.5, "min": 1, "max": 6}}
        }"#;

        let report: DataQualityReport = serde_json::from_str(json).unwrap();

        assert_eq!(
            report.columns_with_nulls(),
            vec![("customer_name", 2), ("tax_rate", 1)]
        );
        assert_eq!(report.basic_statistics["quantity"].max, 6.0);
    }
}
