//! Caller-supplied predicates.
//!
//! A panicking predicate is a bug in the caller, not a failed rule, so the
//! panic is left to unwind through the driver.

use super::label_or;
use crate::field::Predicate;
use crate::foundation::ValidationFailure;

pub(super) fn predicate<V>(
    field: &str,
    label: &str,
    check: &Predicate<V>,
    message: &str,
    value: &V,
) -> Result<(), ValidationFailure> {
    if check(value) {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            field,
            label_or(label, "custom"),
            message.to_owned(),
        ))
    }
}
