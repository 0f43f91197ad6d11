//! `min_length` / `max_length`: bounds on a value's textual length.
//!
//! Length is measured on the canonical text form with surrounding
//! whitespace trimmed, in Unicode scalar values (`char`s), not grapheme
//! clusters: a base letter followed by a combining mark counts as two. This
//! is not the same measurement as [`magnitude`](super::magnitude).

use crate::foundation::{ValidationFailure, ValueView};

/// Trimmed character count of the value's canonical text.
///
/// `42` has length 2, `18.0` has length 4, `true` has length 4, and an
/// absent optional has length 0.
#[must_use]
pub fn text_length(view: ValueView<'_>) -> usize {
    view.canonical_text().trim().chars().count()
}

pub(super) fn min_length(
    field: &str,
    view: ValueView<'_>,
    min: usize,
) -> Result<(), ValidationFailure> {
    let actual = text_length(view);
    if actual >= min {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            field,
            "min_length",
            format!("must be at least {min} characters"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string()))
    }
}

pub(super) fn max_length(
    field: &str,
    view: ValueView<'_>,
    max: usize,
) -> Result<(), ValidationFailure> {
    let actual = text_length(view);
    if actual <= max {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            field,
            "max_length",
            format!("must not be longer than {max} characters"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string()))
    }
}
