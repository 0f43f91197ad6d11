//! Error types for validation failures
//!
//! [`ValidationFailure`] is data, not an exception: rules report problems by
//! returning one, and the driver collects them into [`ValidationFailures`].
//! [`PatternError`] and [`CoercionError`] are real Rust errors for contract
//! violations the caller has to handle.
//!
//! Tag and message use `Cow<'static, str>` so the built-in rules never
//! allocate for their static tags.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::value::ScalarKind;

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// One rule failing for one field.
///
/// # Examples
///
/// ```
/// use fieldrules::foundation::ValidationFailure;
///
/// let failure = ValidationFailure::new("age", "min_size", "must be at least 18.0")
///     .with_param("min", "18.0");
///
/// assert_eq!(failure.tag, "min_size");
/// assert_eq!(failure.param("min"), Some("18.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Name of the field the rule was attached to.
    pub field: String,

    /// Machine-readable rule tag.
    ///
    /// Either the rule's default tag ("required", "min_length", ...) or the
    /// label the caller supplied.
    pub tag: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (thresholds and measured values).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationFailure {
    /// Creates a failure for `field` with a tag and message.
    pub fn new(
        field: impl Into<String>,
        tag: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.into(),
            tag: tag.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.field, self.tag, self.message)
    }
}

impl std::error::Error for ValidationFailure {}

// ============================================================================
// FAILURE COLLECTION
// ============================================================================

/// Every failure produced by one field, in rule attachment order.
///
/// Never empty: the only constructor refuses an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationFailures {
    failures: Vec<ValidationFailure>,
}

impl ValidationFailures {
    /// Wraps a list of failures, or returns `None` when it is empty.
    #[must_use]
    pub fn from_vec(failures: Vec<ValidationFailure>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    /// Number of failures (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// The first recorded failure.
    #[must_use]
    pub fn first(&self) -> &ValidationFailure {
        &self.failures[0]
    }

    /// Name of the field these failures belong to.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.first().field
    }

    /// All failures as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Iterates over the failures in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.failures.iter()
    }

    /// Rule tags in order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.tag.as_ref())
    }

    /// Messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.message.as_ref())
    }

    /// Consumes the collection and returns the inner list.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

impl IntoIterator for ValidationFailures {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailures {}

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

/// A pattern that could not be compiled.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid pattern `{pattern}`")]
pub struct PatternError {
    /// The pattern text as supplied.
    pub pattern: String,
    #[source]
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }
}

/// A JSON value that does not hold the requested scalar kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot coerce {actual} into {expected}")]
pub struct CoercionError {
    /// Kind that was requested.
    pub expected: ScalarKind,
    /// JSON type that was found.
    pub actual: &'static str,
}

impl CoercionError {
    pub(crate) fn new(expected: ScalarKind, raw: &Value) -> Self {
        let actual = match raw {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Self { expected, actual }
    }
}
