//! `min_size` / `max_size`: bounds on a value's magnitude.

use crate::foundation::value::render_float;
use crate::foundation::{ValidationFailure, ValueView};

/// Numeric magnitude of a value.
///
/// Numbers are used as-is, text measures its length in bytes (untrimmed),
/// booleans count as `1.0` / `0.0`. An absent optional measures its kind's
/// zero value, which is always `0.0`.
#[must_use]
pub fn magnitude(view: ValueView<'_>) -> f64 {
    match view {
        ValueView::Int(v) => v as f64,
        ValueView::Float(v) => v,
        ValueView::Text(v) => v.len() as f64,
        ValueView::Bool(v) => {
            if v {
                1.0
            } else {
                0.0
            }
        }
        ValueView::Absent(kind) => magnitude(kind.zero_view()),
    }
}

pub(super) fn min_size(field: &str, view: ValueView<'_>, min: f64) -> Result<(), ValidationFailure> {
    let actual = magnitude(view);
    if actual >= min {
        Ok(())
    } else {
        let min = render_float(min);
        Err(
            ValidationFailure::new(field, "min_size", format!("must be at least {min}"))
                .with_param("min", min)
                .with_param("actual", render_float(actual)),
        )
    }
}

pub(super) fn max_size(field: &str, view: ValueView<'_>, max: f64) -> Result<(), ValidationFailure> {
    let actual = magnitude(view);
    if actual <= max {
        Ok(())
    } else {
        let max = render_float(max);
        Err(ValidationFailure::new(
            field,
            "max_size",
            format!("must not be greater than {max}"),
        )
        .with_param("max", max)
        .with_param("actual", render_float(actual)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ScalarKind;
    use rstest::rstest;

    #[rstest]
    #[case(ValueView::Int(16), 16.0)]
    #[case(ValueView::Float(2.5), 2.5)]
    #[case(ValueView::Text("hello   "), 8.0)]
    #[case(ValueView::Text("h\u{e9}"), 3.0)]
    #[case(ValueView::Bool(true), 1.0)]
    #[case(ValueView::Bool(false), 0.0)]
    #[case(ValueView::Absent(ScalarKind::Text), 0.0)]
    #[case(ValueView::Absent(ScalarKind::Float), 0.0)]
    fn test_magnitude_per_kind(#[case] view: ValueView<'static>, #[case] expected: f64) {
        assert_eq!(magnitude(view), expected);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(min_size("n", ValueView::Float(18.0), 18.0).is_ok());
        assert!(max_size("n", ValueView::Float(21.0), 21.0).is_ok());
    }

    #[test]
    fn test_min_size_failure_message() {
        let failure = min_size("age", ValueView::Float(16.0), 18.0).unwrap_err();
        assert_eq!(failure.tag, "min_size");
        assert_eq!(failure.message, "must be at least 18.0");
        assert_eq!(failure.param("actual"), Some("16.0"));
    }

    #[test]
    fn test_text_size_counts_untrimmed_bytes() {
        let failure = max_size("word", ValueView::Text("hello   "), 5.0).unwrap_err();
        assert_eq!(failure.message, "must not be greater than 5.0");
        assert_eq!(failure.param("actual"), Some("8.0"));
    }

    #[test]
    fn test_absent_optional_uses_zero() {
        let absent = ValueView::Absent(ScalarKind::Int);
        assert!(min_size("n", absent, 1.0).is_err());
        assert!(min_size("n", absent, 0.0).is_ok());
        assert!(max_size("n", absent, 0.0).is_ok());
    }
}
