//! `eq` / `not_eq`: comparison against a fixed value of the field's own type.
//!
//! Uses the type's `PartialEq`: numeric equality for numbers, exact byte
//! equality for text. Text comparison is not constant-time.

use super::label_or;
use crate::foundation::{FieldValue, ValidationFailure};

pub(super) fn eq<V: FieldValue>(
    field: &str,
    label: &str,
    value: &V,
    expected: &V,
) -> Result<(), ValidationFailure> {
    if value == expected {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            field,
            label_or(label, "eq"),
            format!("must be equal to {}", expected.describe()),
        ))
    }
}

pub(super) fn not_eq<V: FieldValue>(
    field: &str,
    label: &str,
    value: &V,
    unexpected: &V,
) -> Result<(), ValidationFailure> {
    if value == unexpected {
        Err(ValidationFailure::new(
            field,
            label_or(label, "not_eq"),
            format!("must not be equal to {}", unexpected.describe()),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_and_not_eq_are_complements() {
        let cases: [(i64, i64); 3] = [(1, 1), (1, 2), (-5, -5)];
        for (value, other) in cases {
            assert_eq!(
                eq("n", "", &value, &other).is_ok(),
                not_eq("n", "", &value, &other).is_err()
            );
        }
    }

    #[test]
    fn test_text_equality_is_exact() {
        let stored = "secret".to_owned();
        assert!(eq("pw", "", &stored, &"secret".to_owned()).is_ok());
        assert!(eq("pw", "", &stored, &"secret ".to_owned()).is_err());
        assert!(eq("pw", "", &stored, &"Secret".to_owned()).is_err());
    }

    #[test]
    fn test_label_becomes_tag() {
        let failure = eq("confirm", "password_match", &"a".to_owned(), &"b".to_owned()).unwrap_err();
        assert_eq!(failure.tag, "password_match");
        assert_eq!(failure.message, "must be equal to b");
    }

    #[test]
    fn test_default_tags() {
        assert_eq!(eq("n", "", &1.5_f64, &2.0).unwrap_err().tag, "eq");
        let failure = not_eq("n", "", &2.0_f64, &2.0).unwrap_err();
        assert_eq!(failure.tag, "not_eq");
        assert_eq!(failure.message, "must not be equal to 2.0");
    }

    #[test]
    fn test_optional_comparands() {
        assert!(eq("n", "", &None::<i64>, &None).is_ok());
        assert!(eq("n", "", &Some(3_i64), &None).is_err());
        let failure = not_eq("n", "", &None::<bool>, &None).unwrap_err();
        assert_eq!(failure.message, "must not be equal to none");
    }
}
