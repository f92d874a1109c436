use crate::domain::RawCustomerRecord;
use crate::pipeline::features::parse_total_charges;
use crate::pipeline::quality::is_blank;

/// Completeness/validity predicate over the source raw record.
///
/// A record failing any rule is dropped silently; exclusions are visible
/// only through the pre-filter quality counts and the raw-vs-emitted
/// shrinkage, never as per-record errors.
pub struct RecordFilter;

impl RecordFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn admits(&self, raw: &RawCustomerRecord) -> bool {
        if is_blank(raw.customer_id.as_deref()) {
            return false;
        }
        if is_blank(raw.contract.as_deref()) {
            return false;
        }
        if is_blank(raw.churn.as_deref()) {
            return false;
        }
        match raw.tenure {
            Some(t) if t > 0 => {}
            _ => return false,
        }
        match raw.monthly_charges {
            Some(m) if m >= 0.0 => {}
            _ => return false,
        }
        match parse_total_charges(raw.total_charges.as_deref()) {
            Some(total) if total >= 0.0 => {}
            _ => return false,
        }
        true
    }
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self::new()
    }
}
