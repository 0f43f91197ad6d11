//! Validating many fields at once.

use serde::Serialize;

use crate::foundation::{Validate, ValidationFailure};

/// Result of validating one field inside a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    /// Field name.
    pub name: String,
    /// Failures in rule order; empty when the field passed.
    pub failures: Vec<ValidationFailure>,
}

impl FieldReport {
    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validates each field independently, in input order.
///
/// With `keep_failed_only`, reports for passing fields are dropped.
///
/// # Examples
///
/// ```
/// use fieldrules::prelude::*;
///
/// let name = string_field("name", "Ann").required();
/// let age = int_field("age", 0).required();
///
/// assert_eq!(validate_many(&[&name, &age], false).len(), 2);
///
/// let failed = validate_many(&[&name, &age], true);
/// assert_eq!(failed.len(), 1);
/// assert_eq!(failed[0].name, "age");
/// ```
pub fn validate_many(fields: &[&dyn Validate], keep_failed_only: bool) -> Vec<FieldReport> {
    let reports: Vec<FieldReport> = fields
        .iter()
        .map(|field| FieldReport {
            name: field.name().to_owned(),
            failures: field.failures(),
        })
        .filter(|report| !keep_failed_only || !report.is_valid())
        .collect();
    tracing::debug!(
        fields = fields.len(),
        reported = reports.len(),
        keep_failed_only,
        "validated batch"
    );
    reports
}
