use crate::domain::FeatureRecord;
use crate::error::{PipelineError, Result};
use crate::pipeline::features::FeatureCandidate;

/// The fixed output column order. A stable contract for downstream training
/// and scoring jobs; changing it requires a version bump.
pub const FEATURE_COLUMNS: [&str; 13] = [
    "customerID",
    "MonthsActive",
    "SubscriptionPrice",
    "LifetimeValue",
    "IsMonthly",
    "HasManualPayment",
    "IsLowEngagement",
    "UsesPremiumFeatures",
    "UsesFeature1",
    "UsesFeature2",
    "ContactedSupport",
    "FeatureAdoptionScore",
    "Churned",
];

/// Final stage: turns an admitted candidate into the fixed-schema feature
/// row. Admitted candidates are guaranteed complete by the record filter,
/// so the null branches here are unreachable; they surface as errors rather
/// than panics.
pub struct OutputProjector;

impl OutputProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn project(&self, candidate: &FeatureCandidate) -> Result<FeatureRecord> {
        let customer_id = candidate
            .customer_id
            .clone()
            .ok_or_else(|| PipelineError::Projection("customerID is null".to_string()))?;
        let months_active = candidate
            .months_active
            .ok_or_else(|| PipelineError::Projection("MonthsActive is null".to_string()))?;
        let subscription_price = candidate
            .subscription_price
            .ok_or_else(|| PipelineError::Projection("SubscriptionPrice is null".to_string()))?;
        let lifetime_value = candidate
            .lifetime_value
            .ok_or_else(|| PipelineError::Projection("LifetimeValue is null".to_string()))?;

        Ok(FeatureRecord {
            customer_id,
            months_active,
            subscription_price,
            lifetime_value,
            is_monthly: candidate.is_monthly,
            has_manual_payment: candidate.has_manual_payment,
            is_low_engagement: candidate.is_low_engagement,
            uses_premium_features: candidate.uses_premium_features,
            uses_feature1: candidate.uses_feature1,
            uses_feature2: candidate.uses_feature2,
            contacted_support: candidate.contacted_support,
            feature_adoption_score: candidate.feature_adoption_score,
            churned: candidate.churned,
        })
    }
}

impl Default for OutputProjector {
    fn default() -> Self {
        Self::new()
    }
}
