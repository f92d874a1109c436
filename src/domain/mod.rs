use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One customer row as stored by the upstream system of record.
///
/// Every field except the key is nullable upstream; `TotalCharges` arrives
/// string-encoded and may be blank. Field names follow the upstream column
/// names so rows deserialize directly from source payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCustomerRecord {
    #[serde(rename = "customerID")]
    pub customer_id: Option<String>,
    #[serde(rename = "gender")]
    pub gender: Option<String>,
    #[serde(rename = "tenure")]
    pub tenure: Option<i64>,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: Option<f64>,
    #[serde(rename = "TotalCharges")]
    pub total_charges: Option<String>,
    #[serde(rename = "Contract")]
    pub contract: Option<String>,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: Option<String>,
    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: Option<String>,
    #[serde(rename = "InternetService")]
    pub internet_service: Option<String>,
    #[serde(rename = "OnlineSecurity")]
    pub online_security: Option<String>,
    #[serde(rename = "OnlineBackup")]
    pub online_backup: Option<String>,
    #[serde(rename = "TechSupport")]
    pub tech_support: Option<String>,
    #[serde(rename = "Churn")]
    pub churn: Option<String>,
}

/// In-memory snapshot of the upstream customer table for one pipeline run.
///
/// Carries the column set actually reported by the upstream system so the
/// schema gate can check it against the required set. The snapshot is
/// treated as immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub name: String,
    pub columns: Vec<String>,
    pub records: Vec<RawCustomerRecord>,
}

impl SourceTable {
    /// Build a snapshot from a JSON array of row objects.
    ///
    /// The column set is the union of keys across all rows, in sorted order.
    pub fn from_json(name: &str, rows: &serde_json::Value) -> Result<Self> {
        let empty = Vec::new();
        let rows = rows.as_array().unwrap_or(&empty);

        let mut columns = BTreeSet::new();
        for row in rows {
            if let Some(obj) = row.as_object() {
                for key in obj.keys() {
                    columns.insert(key.clone());
                }
            }
        }

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(serde_json::from_value(row.clone())?);
        }

        Ok(Self {
            name: name.to_string(),
            columns: columns.into_iter().collect(),
            records,
        })
    }
}

/// One ML-ready feature row, emitted in the fixed column order below.
///
/// Column order and naming are a stable contract for downstream training
/// and scoring jobs and must not be reordered without a version bump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "MonthsActive")]
    pub months_active: i64,
    #[serde(rename = "SubscriptionPrice")]
    pub subscription_price: f64,
    #[serde(rename = "LifetimeValue")]
    pub lifetime_value: f64,
    #[serde(rename = "IsMonthly")]
    pub is_monthly: u8,
    #[serde(rename = "HasManualPayment")]
    pub has_manual_payment: u8,
    #[serde(rename = "IsLowEngagement")]
    pub is_low_engagement: u8,
    #[serde(rename = "UsesPremiumFeatures")]
    pub uses_premium_features: u8,
    #[serde(rename = "UsesFeature1")]
    pub uses_feature1: u8,
    #[serde(rename = "UsesFeature2")]
    pub uses_feature2: u8,
    #[serde(rename = "ContactedSupport")]
    pub contacted_support: u8,
    #[serde(rename = "FeatureAdoptionScore")]
    pub feature_adoption_score: u8,
    #[serde(rename = "Churned")]
    pub churned: u8,
}
