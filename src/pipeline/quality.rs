use serde::Serialize;
use tracing::{info, warn};

use crate::domain::RawCustomerRecord;

/// One named quality count over the raw snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityMetric {
    pub name: &'static str,
    pub count: usize,
}

/// Fixed-shape quality report: six (name, count) pairs sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub metrics: Vec<QualityMetric>,
}

impl QualityReport {
    pub fn count(&self, name: &str) -> Option<usize> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.count)
    }
}

/// Computes aggregate data-health counts over the full unfiltered input.
///
/// Purely observational: the counts are reported but never alter downstream
/// behavior. Must run over the raw snapshot so the numbers reflect source
/// data health rather than post-filter survivorship.
pub struct DataQualityReporter;

impl DataQualityReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, records: &[RawCustomerRecord]) -> QualityReport {
        let total = records.len();
        let missing_customer_id = records
            .iter()
            .filter(|r| is_blank(r.customer_id.as_deref()))
            .count();
        let missing_contract = records
            .iter()
            .filter(|r| is_blank(r.contract.as_deref()))
            .count();
        let invalid_tenure = records
            .iter()
            .filter(|r| !matches!(r.tenure, Some(t) if t > 0))
            .count();
        let blank_total_charges = records
            .iter()
            .filter(|r| is_blank(r.total_charges.as_deref()))
            .count();
        let missing_churn = records
            .iter()
            .filter(|r| is_blank(r.churn.as_deref()))
            .count();

        let mut metrics = vec![
            QualityMetric { name: "Total Records", count: total },
            QualityMetric { name: "Missing CustomerID", count: missing_customer_id },
            QualityMetric { name: "Missing Contract", count: missing_contract },
            QualityMetric { name: "Invalid Tenure", count: invalid_tenure },
            QualityMetric { name: "Blank TotalCharges", count: blank_total_charges },
            QualityMetric { name: "Missing Churn", count: missing_churn },
        ];
        metrics.sort_by(|a, b| a.name.cmp(b.name));

        for metric in &metrics {
            if metric.name == "Total Records" {
                info!(count = metric.count, "quality: {}", metric.name);
            } else if metric.count > 0 {
                warn!(count = metric.count, "quality: {}", metric.name);
            } else {
                info!(count = metric.count, "quality: {}", metric.name);
            }
        }

        QualityReport { metrics }
    }
}

impl Default for DataQualityReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Missing or blank-after-trim. Shared definition for the reporter's
/// "missing/blank" counts.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    match value {
        Some(v) => v.trim().is_empty(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer_id: &str) -> RawCustomerRecord {
        RawCustomerRecord {
            customer_id: Some(customer_id.to_string()),
            tenure: Some(12),
            monthly_charges: Some(50.0),
            total_charges: Some("600.0".to_string()),
            contract: Some("One year".to_string()),
            churn: Some("No".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_report_has_six_metrics_sorted_by_name() {
        let reporter = DataQualityReporter::new();
        let report = reporter.report(&[record("0001-A")]);

        let names: Vec<&str> = report.metrics.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "Blank TotalCharges",
                "Invalid Tenure",
                "Missing Churn",
                "Missing Contract",
                "Missing CustomerID",
                "Total Records",
            ]
        );
    }

    #[test]
    fn test_counts_reflect_raw_data_health() {
        let reporter = DataQualityReporter::new();

        let mut blank_charges = record("0002-B");
        blank_charges.total_charges = Some(" ".to_string());

        let mut zero_tenure = record("0003-C");
        zero_tenure.tenure = Some(0);

        let mut no_churn = record("0004-D");
        no_churn.churn = None;

        let mut no_id = record("ignored");
        no_id.customer_id = Some("   ".to_string());

        let mut no_contract = record("0005-E");
        no_contract.contract = Some(String::new());

        let records = vec![record("0001-A"), blank_charges, zero_tenure, no_churn, no_id, no_contract];
        let report = reporter.report(&records);

        assert_eq!(report.count("Total Records"), Some(6));
        assert_eq!(report.count("Blank TotalCharges"), Some(1));
        assert_eq!(report.count("Invalid Tenure"), Some(1));
        assert_eq!(report.count("Missing Churn"), Some(1));
        assert_eq!(report.count("Missing CustomerID"), Some(1));
        assert_eq!(report.count("Missing Contract"), Some(1));
    }

    #[test]
    fn test_null_tenure_counts_as_invalid() {
        let reporter = DataQualityReporter::new();
        let mut r = record("0001-A");
        r.tenure = None;
        let report = reporter.report(&[r]);
        assert_eq!(report.count("Invalid Tenure"), Some(1));
    }

    #[test]
    fn test_empty_input_yields_zero_counts() {
        let reporter = DataQualityReporter::new();
        let report = reporter.report(&[]);
        assert_eq!(report.count("Total Records"), Some(0));
        assert!(report.metrics.iter().all(|m| m.count == 0));
    }
}
