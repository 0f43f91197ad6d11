//! Fields: a name, a value of fixed kind, and an ordered rule chain.
//!
//! Fields are built with the constructors in this module ([`int_field`],
//! [`optional_string_field`], ...) and extended with builder methods. Every
//! builder consumes the field and returns it with one more rule appended;
//! nothing is mutated behind the caller's back.
//!
//! # Examples
//!
//! ```
//! use fieldrules::prelude::*;
//!
//! let outcome = int_field("age", 16)
//!     .required()
//!     .to_float()
//!     .min_size(18.0)
//!     .max_size(21.0)
//!     .validate();
//!
//! let failures = outcome.unwrap_err();
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures.first().tag, "min_size");
//! assert_eq!(failures.first().message, "must be at least 18.0");
//! ```

mod rule;

pub use rule::{Predicate, Rule};
pub(crate) use rule::RuleKind;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{
    FieldValue, PatternError, Validate, ValidationFailure, ValidationFailures, ValidationOutcome,
};

// ============================================================================
// KIND MARKERS
// ============================================================================

/// Value kinds that expose `min_size` / `max_size`.
///
/// Integers are left out on purpose: convert with [`Field::to_float`] first.
pub trait SizeBounded: FieldValue {}

impl SizeBounded for f64 {}
impl SizeBounded for String {}
impl SizeBounded for bool {}
impl SizeBounded for Option<f64> {}
impl SizeBounded for Option<String> {}
impl SizeBounded for Option<bool> {}

/// Value kinds that expose pattern rules.
pub trait TextValue: FieldValue {}

impl TextValue for String {}
impl TextValue for Option<String> {}

// ============================================================================
// FIELD
// ============================================================================

/// A named value plus the rules it must satisfy.
#[derive(Debug, Clone)]
pub struct Field<V> {
    name: String,
    value: V,
    rules: Vec<Rule<V>>,
}

impl<V: FieldValue> Field<V> {
    /// Creates a field with an empty rule chain.
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
            rules: Vec::new(),
        }
    }

    /// Creates a field from a dynamic JSON value.
    ///
    /// Mismatched JSON falls back to the kind's zero value (or `None` for
    /// optional kinds); attach rules to reject such input.
    ///
    /// ```
    /// use fieldrules::field::Field;
    /// use serde_json::json;
    ///
    /// let age = Field::<i64>::from_json("age", &json!(42));
    /// assert_eq!(*age.value(), 42);
    ///
    /// let nick = Field::<Option<String>>::from_json("nick", &json!(null));
    /// assert_eq!(*nick.value(), None);
    /// ```
    pub fn from_json(name: impl Into<String>, raw: &Value) -> Self {
        Self::new(name, V::from_json(raw))
    }

    /// The field's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's value.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Attached rules in attachment order.
    pub fn rules(&self) -> &[Rule<V>] {
        &self.rules
    }

    /// Number of attached rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Appends any rule valid for this kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: Rule<V>) -> Self {
        self.rules.push(rule);
        self
    }

    /// The value must be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self) -> Self {
        self.with_rule(Rule::required())
    }

    /// Trimmed textual length must be at least `min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, min: usize) -> Self {
        self.with_rule(Rule::min_length(min))
    }

    /// Trimmed textual length must be at most `max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, max: usize) -> Self {
        self.with_rule(Rule::max_length(max))
    }

    /// The value must equal `value`.
    #[must_use = "builder methods must be chained or built"]
    pub fn eq(self, label: impl Into<String>, value: V) -> Self {
        self.with_rule(Rule::eq(label, value))
    }

    /// The value must differ from `value`.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_eq(self, label: impl Into<String>, value: V) -> Self {
        self.with_rule(Rule::not_eq(label, value))
    }

    /// The value must satisfy `check`; `message` is reported otherwise.
    ///
    /// A panic inside `check` is not turned into a failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_predicate<F>(
        self,
        label: impl Into<String>,
        check: F,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.with_rule(Rule::predicate(label, check, message))
    }

    /// Runs every rule and returns the field, or every failure in order.
    pub fn validate(self) -> ValidationOutcome<V> {
        match ValidationFailures::from_vec(Validate::failures(&self)) {
            None => Ok(self),
            Some(failures) => Err(failures),
        }
    }
}

impl<V: SizeBounded> Field<V> {
    /// Magnitude must be at least `min` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_size(self, min: f64) -> Self {
        self.with_rule(Rule::min_size(min))
    }

    /// Magnitude must be at most `max` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_size(self, max: f64) -> Self {
        self.with_rule(Rule::max_size(max))
    }
}

impl<V: TextValue> Field<V> {
    /// The text must match `matcher`.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(
        self,
        label: impl Into<String>,
        matcher: Regex,
        message: impl Into<String>,
    ) -> Self {
        self.with_rule(Rule::pattern(label, matcher, message))
    }

    /// Compiles `pattern` and attaches it.
    ///
    /// ```
    /// use fieldrules::prelude::*;
    ///
    /// # fn main() -> Result<(), PatternError> {
    /// let zip = string_field("zip", "1234").raw_pattern("zip", r"^\d{5}$", "must be 5 digits")?;
    /// assert!(zip.validate().is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn raw_pattern(
        self,
        label: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, PatternError> {
        Ok(self.with_rule(Rule::raw_pattern(label, pattern, message)?))
    }
}

fn round_to_int(value: &f64) -> i64 {
    value.round() as i64
}

impl Field<i64> {
    /// Converts to a real-number field, carrying every attached rule.
    ///
    /// Predicates keep seeing an integer: the real value is rounded before
    /// the original check runs. Size rules are only available afterwards.
    pub fn to_float(self) -> Field<f64> {
        Field {
            name: self.name,
            value: self.value as f64,
            rules: self
                .rules
                .into_iter()
                .map(|rule| rule.convert(|v| v as f64, round_to_int))
                .collect(),
        }
    }
}

impl Field<Option<i64>> {
    /// Converts to an optional real-number field, carrying every attached rule.
    pub fn to_float(self) -> Field<Option<f64>> {
        Field {
            name: self.name,
            value: self.value.map(|v| v as f64),
            rules: self
                .rules
                .into_iter()
                .map(|rule| {
                    rule.convert(|v| v.map(|n| n as f64), |v| v.as_ref().map(round_to_int))
                })
                .collect(),
        }
    }
}

impl<V: FieldValue> Validate for Field<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn failures(&self) -> Vec<ValidationFailure> {
        let failures: Vec<ValidationFailure> = self
            .rules
            .iter()
            .filter_map(|rule| crate::validators::evaluate(rule, &self.name, &self.value))
            .collect();
        tracing::debug!(
            field = %self.name,
            rules = self.rules.len(),
            failures = failures.len(),
            "validated field"
        );
        failures
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

crate::macros::field_kinds! {
    i64 => int_field, optional_int_field;
    f64 => float_field, optional_float_field;
    String => string_field, optional_string_field;
    bool => bool_field, optional_bool_field;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tags<V: FieldValue>(field: &Field<V>) -> Vec<String> {
        field.failures().into_iter().map(|f| f.tag.into_owned()).collect()
    }

    #[test]
    fn test_empty_chain_always_passes() {
        assert!(int_field("n", 0).validate().is_ok());
        assert!(string_field("s", "").validate().is_ok());
        assert!(optional_bool_field("b", None).validate().is_ok());
    }

    #[test]
    fn test_builders_append_in_order() {
        let field = string_field("name", "x").required().min_length(2).max_length(10);
        let rule_tags: Vec<_> = field.rules().iter().map(Rule::tag).collect();
        assert_eq!(rule_tags, ["required", "min_length", "max_length"]);
        assert_eq!(field.rule_count(), 3);
    }

    #[test]
    fn test_clone_keeps_history_independent() {
        let base = string_field("name", "").required();
        let extended = base.clone().min_length(3);
        assert_eq!(base.rule_count(), 1);
        assert_eq!(extended.rule_count(), 2);
    }

    #[test]
    fn test_no_short_circuit() {
        let field = string_field("code", "ab")
            .min_length(3)
            .max_length(5)
            .raw_pattern("digits", r"^\d+$", "digits only")
            .unwrap();
        assert_eq!(tags(&field), ["min_length", "digits"]);
    }

    #[test]
    fn test_success_returns_the_field() {
        let field = string_field("name", "Ann").required();
        let validated = field.validate().unwrap();
        assert_eq!(validated.value(), "Ann");
        assert_eq!(validated.name(), "name");
    }

    #[test]
    fn test_optional_fields_delegate() {
        assert_eq!(tags(&optional_string_field("n", None).required()), ["required"]);
        assert_eq!(
            tags(&optional_string_field("n", Some(String::new())).required()),
            ["required"]
        );
        assert!(tags(&optional_string_field("n", Some("x".into())).required()).is_empty());
    }

    #[test]
    fn test_size_and_length_are_distinct() {
        let size = string_field("w", "hello   ").max_size(5.0);
        let length = string_field("w", "hello   ").max_length(5);
        assert_eq!(tags(&size), ["max_size"]);
        assert!(tags(&length).is_empty());
    }

    #[test]
    fn test_bool_size_and_length() {
        assert_eq!(tags(&bool_field("b", false).min_size(1.0)), ["min_size"]);
        assert!(tags(&bool_field("b", true).min_size(1.0)).is_empty());
        assert_eq!(tags(&bool_field("b", false).max_length(4)), ["max_length"]);
    }

    #[test]
    fn test_absent_optional_size() {
        assert_eq!(tags(&optional_float_field("f", None).min_size(0.5)), ["min_size"]);
        assert!(tags(&optional_float_field("f", None).max_size(0.0)).is_empty());
    }

    #[test]
    fn test_to_float_keeps_rules() {
        let field = int_field("age", 16)
            .required()
            .eq("adult_age", 18)
            .to_float()
            .min_size(18.0);
        assert_eq!(*field.value(), 16.0);
        assert_eq!(tags(&field), ["adult_age", "min_size"]);
    }

    #[test]
    fn test_to_float_rounds_for_predicates() {
        let field = int_field("n", 3)
            .with_predicate("odd", |v: &i64| v % 2 == 1, "must be odd")
            .to_float();
        assert!(tags(&field).is_empty());

        let optional = optional_int_field("n", Some(4))
            .with_predicate("odd", |v: &Option<i64>| v.is_some_and(|n| n % 2 == 1), "must be odd")
            .to_float()
            .max_size(10.0);
        assert_eq!(tags(&optional), ["odd"]);
    }

    #[test]
    fn test_from_json_per_kind() {
        assert_eq!(*Field::<f64>::from_json("f", &json!(1)).value(), 1.0);
        assert!(!*Field::<bool>::from_json("b", &json!("yes")).value());
        assert_eq!(
            *Field::<Option<i64>>::from_json("n", &json!("7")).value(),
            None
        );
        assert_eq!(
            Field::<Option<String>>::from_json("s", &json!("hi")).value().as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn test_eq_on_text() {
        let field = string_field("pw2", "hunter2").eq("password_match", "hunter3".to_owned());
        let failures = field.failures();
        assert_eq!(failures[0].message, "must be equal to hunter3");
    }
}
