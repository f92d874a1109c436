use serde::Serialize;

use crate::domain::RawCustomerRecord;

/// Deriver output before filtering: numeric fields may still be null and are
/// rejected later by the record filter, never here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCandidate {
    pub customer_id: Option<String>,
    pub months_active: Option<i64>,
    pub subscription_price: Option<f64>,
    pub lifetime_value: Option<f64>,
    pub is_monthly: u8,
    pub has_manual_payment: u8,
    pub is_low_engagement: u8,
    pub uses_premium_features: u8,
    pub uses_feature1: u8,
    pub uses_feature2: u8,
    pub contacted_support: u8,
    pub feature_adoption_score: u8,
    pub churned: u8,
}

/// Pure per-record mapping from raw fields to derived feature values.
///
/// Categorical comparisons are exact and case-sensitive; a missing value or
/// an unexpected category yields 0, never an error. Defaulting missing
/// signals to "no feature" is deliberate business policy. No derivation
/// depends on any other record.
pub struct FeatureDeriver;

impl FeatureDeriver {
    pub fn new() -> Self {
        Self
    }

    pub fn derive(&self, raw: &RawCustomerRecord) -> FeatureCandidate {
        // The adoption score re-evaluates the same three categorical
        // conditions as the flags below rather than summing them; upstream
        // keeps these paths separate on purpose.
        let adoption_score = flag_eq(raw.online_security.as_deref(), "Yes")
            + flag_eq(raw.online_backup.as_deref(), "Yes")
            + flag_eq(raw.internet_service.as_deref(), "Fiber optic");

        FeatureCandidate {
            customer_id: raw.customer_id.clone(),
            months_active: raw.tenure,
            subscription_price: raw.monthly_charges,
            lifetime_value: parse_total_charges(raw.total_charges.as_deref()),
            is_monthly: flag_eq(raw.contract.as_deref(), "Month-to-month"),
            has_manual_payment: flag_eq(raw.payment_method.as_deref(), "Electronic check"),
            is_low_engagement: flag_eq(raw.paperless_billing.as_deref(), "No"),
            uses_premium_features: flag_eq(raw.internet_service.as_deref(), "Fiber optic"),
            uses_feature1: flag_eq(raw.online_security.as_deref(), "Yes"),
            uses_feature2: flag_eq(raw.online_backup.as_deref(), "Yes"),
            contacted_support: flag_eq(raw.tech_support.as_deref(), "Yes"),
            feature_adoption_score: adoption_score,
            churned: flag_eq(raw.churn.as_deref(), "Yes"),
        }
    }
}

impl Default for FeatureDeriver {
    fn default() -> Self {
        Self::new()
    }
}

/// 1 if the value equals the literal exactly (case-sensitive), else 0.
fn flag_eq(value: Option<&str>, literal: &str) -> u8 {
    match value {
        Some(v) if v == literal => 1,
        _ => 0,
    }
}

/// Trim-then-parse of the string-encoded `TotalCharges`; `None` when the
/// value is missing, blank, or non-numeric. Shared with the record filter
/// so the two parses cannot drift.
pub(crate) fn parse_total_charges(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}
