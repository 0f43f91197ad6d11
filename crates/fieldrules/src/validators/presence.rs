//! The `required` rule.

use crate::foundation::{ValidationFailure, ValueView};

/// Whether a value counts as present.
///
/// | kind            | present when             |
/// |-----------------|--------------------------|
/// | integer         | `!= 0`                   |
/// | real            | `!= 0.0`                 |
/// | text            | non-empty after trimming |
/// | boolean         | always                   |
/// | absent optional | never                    |
///
/// A present optional delegates to its inner value.
#[must_use]
pub fn is_present(view: ValueView<'_>) -> bool {
    match view {
        ValueView::Int(v) => v != 0,
        ValueView::Float(v) => v != 0.0,
        ValueView::Text(v) => !v.trim().is_empty(),
        ValueView::Bool(_) => true,
        ValueView::Absent(_) => false,
    }
}

pub(super) fn required(field: &str, view: ValueView<'_>) -> Result<(), ValidationFailure> {
    if is_present(view) {
        Ok(())
    } else {
        Err(ValidationFailure::new(field, "required", "is required"))
    }
}
