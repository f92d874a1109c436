use tracing::info;

use crate::domain::SourceTable;
use crate::error::{PipelineError, Result};

/// Columns the upstream customer table must expose before any other stage
/// runs. Extra columns are ignored; order here fixes the order missing
/// columns are reported in.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "customerID",
    "gender",
    "tenure",
    "MonthlyCharges",
    "TotalCharges",
    "Contract",
    "PaymentMethod",
    "PaperlessBilling",
    "InternetService",
    "OnlineSecurity",
    "OnlineBackup",
    "TechSupport",
    "Churn",
];

/// Hard gate over the source snapshot: the table must exist and carry every
/// required column. Nothing downstream runs until this passes.
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the snapshot. `None` means the upstream table is absent.
    ///
    /// Fails with a single fatal error naming the table, or listing every
    /// missing column comma-joined in required-column order.
    pub fn validate(&self, table: Option<&SourceTable>, table_name: &str) -> Result<()> {
        let table = match table {
            Some(t) => t,
            None => return Err(PipelineError::TableMissing(table_name.to_string())),
        };

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !table.columns.iter().any(|c| c == *required))
            .copied()
            .collect();

        if !missing.is_empty() {
            return Err(PipelineError::MissingColumns(missing.join(", ")));
        }

        info!(
            table = %table.name,
            columns = table.columns.len(),
            rows = table.records.len(),
            "schema gate passed"
        );
        Ok(())
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    fn table_with_columns(columns: &[&str]) -> SourceTable {
        SourceTable {
            name: "Customers".to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            records: Vec::new(),
        }
    }

    #[test]
    fn test_missing_table_is_fatal() {
        let validator = SchemaValidator::new();
        let err = validator.validate(None, "Customers").unwrap_err();
        match err {
            PipelineError::TableMissing(name) => assert_eq!(name, "Customers"),
            other => panic!("expected TableMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_all_required_columns_pass() {
        let validator = SchemaValidator::new();
        let table = table_with_columns(&REQUIRED_COLUMNS);
        assert!(validator.validate(Some(&table), "Customers").is_ok());
    }

    #[test]
    fn test_superset_of_columns_passes() {
        let validator = SchemaValidator::new();
        let mut columns: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        columns.push("SeniorCitizen");
        columns.push("Partner");
        let table = table_with_columns(&columns);
        assert!(validator.validate(Some(&table), "Customers").is_ok());
    }

    #[test]
    fn test_missing_column_named_in_error() {
        let validator = SchemaValidator::new();
        let columns: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| **c != "TotalCharges")
            .copied()
            .collect();
        let table = table_with_columns(&columns);

        let err = validator.validate(Some(&table), "Customers").unwrap_err();
        match err {
            PipelineError::MissingColumns(list) => assert_eq!(list, "TotalCharges"),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_missing_columns_comma_joined_in_required_order() {
        let validator = SchemaValidator::new();
        let columns: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| **c != "tenure" && **c != "Churn")
            .copied()
            .collect();
        let table = table_with_columns(&columns);

        let err = validator.validate(Some(&table), "Customers").unwrap_err();
        match err {
            PipelineError::MissingColumns(list) => assert_eq!(list, "tenure, Churn"),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }
}
