//! JSON-shaped error reports.
//!
//! A validated field becomes a `(name, value)` pair where `value` is JSON
//! `null` on success, otherwise its failures in one of two shapes:
//!
//! - [`ErrorFormat::List`]: `["is required", "must be at least 3 characters"]`
//! - [`ErrorFormat::Map`]: `{"required": "is required", "min_length": "..."}`
//!
//! Pairs are combined into one JSON object with
//! [`serializables_to_string`]; key order follows input order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::{FieldValue, Validate, ValidationFailure, ValidationOutcome};

/// A field name paired with its serialized failures (or `null`).
pub type Serializable = (String, Value);

/// Shape used for a field's failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorFormat {
    /// Ordered array of messages; tags are dropped.
    List,
    /// Object keyed by tag. A repeated tag keeps the later message.
    #[default]
    Map,
}

/// Serializes a list of failures in the given shape.
pub fn failures_to_value(failures: &[ValidationFailure], format: ErrorFormat) -> Value {
    match format {
        ErrorFormat::List => Value::Array(
            failures
                .iter()
                .map(|f| Value::String(f.message.to_string()))
                .collect(),
        ),
        ErrorFormat::Map => {
            let mut map = Map::new();
            for failure in failures {
                map.insert(
                    failure.tag.to_string(),
                    Value::String(failure.message.to_string()),
                );
            }
            Value::Object(map)
        }
    }
}

/// Serializes one validation outcome.
///
/// The name is `name_override` when non-empty, otherwise the field's name.
///
/// # Examples
///
/// ```
/// use fieldrules::prelude::*;
/// use serde_json::json;
///
/// let outcome = string_field("last_name", "Smith").max_length(3).validate();
/// let (name, value) = to_serializable(&outcome, "renamed_last_name", ErrorFormat::Map);
///
/// assert_eq!(name, "renamed_last_name");
/// assert_eq!(value, json!({"max_length": "must not be longer than 3 characters"}));
/// ```
pub fn to_serializable<V: FieldValue>(
    outcome: &ValidationOutcome<V>,
    name_override: &str,
    format: ErrorFormat,
) -> Serializable {
    let (name, value) = match outcome {
        Ok(field) => (field.name(), Value::Null),
        Err(failures) => (
            failures.field_name(),
            failures_to_value(failures.as_slice(), format),
        ),
    };
    (resolve_name(name, name_override), value)
}

/// Validates every field and serializes each, in input order.
///
/// Passing fields are kept with a `null` value.
pub fn to_serializable_list(fields: &[&dyn Validate], format: ErrorFormat) -> Vec<Serializable> {
    fields
        .iter()
        .map(|field| {
            let failures = field.failures();
            let value = if failures.is_empty() {
                Value::Null
            } else {
                failures_to_value(&failures, format)
            };
            (field.name().to_owned(), value)
        })
        .collect()
}

/// Combines pairs into one JSON object, preserving insertion order.
pub fn serializables_to_value(pairs: &[Serializable]) -> Value {
    Value::Object(
        pairs
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    )
}

/// Renders pairs as one compact JSON object.
pub fn serializables_to_string(pairs: &[Serializable]) -> String {
    serializables_to_value(pairs).to_string()
}

/// Returns true if any pair carries failures (a non-null value).
pub fn has_errors(pairs: &[Serializable]) -> bool {
    pairs.iter().any(|(_, value)| !value.is_null())
}

fn resolve_name(name: &str, name_override: &str) -> String {
    if name_override.is_empty() {
        name.to_owned()
    } else {
        name_override.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{int_field, string_field};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn failures() -> Vec<ValidationFailure> {
        vec![
            ValidationFailure::new("f", "required", "is required"),
            ValidationFailure::new("f", "min_length", "too short"),
            ValidationFailure::new("f", "required", "still required"),
        ]
    }

    #[test]
    fn test_list_shape_drops_tags() {
        assert_eq!(
            failures_to_value(&failures(), ErrorFormat::List),
            json!(["is required", "too short", "still required"])
        );
    }

    #[test]
    fn test_map_shape_overwrites_duplicates() {
        let value = failures_to_value(&failures(), ErrorFormat::Map);
        assert_eq!(
            value,
            json!({"required": "still required", "min_length": "too short"})
        );
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["required", "min_length"]);
    }

    #[test]
    fn test_success_is_null_in_both_modes() {
        for format in [ErrorFormat::List, ErrorFormat::Map] {
            let outcome = int_field("age", 30).required().validate();
            assert_eq!(to_serializable(&outcome, "", format), ("age".to_owned(), Value::Null));
        }
    }

    #[test]
    fn test_failure_name_comes_from_failures() {
        let outcome = string_field("first_name", "").required().validate();
        let (name, value) = to_serializable(&outcome, "", ErrorFormat::List);
        assert_eq!(name, "first_name");
        assert_eq!(value, json!(["is required"]));
    }

    #[test]
    fn test_has_errors_checks_for_non_null() {
        let clean = vec![("a".to_owned(), Value::Null), ("b".to_owned(), Value::Null)];
        assert!(!has_errors(&clean));
        assert!(!has_errors(&[]));

        let mut dirty = clean;
        dirty.push(("c".to_owned(), json!(["bad"])));
        assert!(has_errors(&dirty));
    }

    #[test]
    fn test_string_keeps_insertion_order() {
        let pairs = vec![
            ("zeta".to_owned(), Value::Null),
            ("alpha".to_owned(), json!({"required": "is required"})),
        ];
        assert_eq!(
            serializables_to_string(&pairs),
            r#"{"zeta":null,"alpha":{"required":"is required"}}"#
        );
    }

    #[test]
    fn test_serializable_list_includes_successes() {
        let ok = int_field("age", 20).required();
        let bad = string_field("name", " ").required();
        let pairs = to_serializable_list(&[&ok, &bad], ErrorFormat::Map);
        assert_eq!(
            pairs,
            vec![
                ("age".to_owned(), Value::Null),
                ("name".to_owned(), json!({"required": "is required"})),
            ]
        );
    }

    #[test]
    fn test_format_deserializes_from_config() {
        let format: ErrorFormat = serde_json::from_value(json!("list")).unwrap();
        assert_eq!(format, ErrorFormat::List);
        assert_eq!(ErrorFormat::default(), ErrorFormat::Map);
    }
}
