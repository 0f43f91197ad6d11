//! Scalar kinds, value views and fail-safe coercion.
//!
//! Every field holds one of four scalar kinds (integer, real, text, boolean),
//! either directly or wrapped in an `Option`. The rule engine never looks at
//! the concrete Rust type; it reads a [`ValueView`] instead, so that every
//! dispatch site is a single exhaustive `match`.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use super::error::CoercionError;

/// Text returned by [`stringify`] for values that have no scalar form.
pub const UNREPRESENTABLE: &str = "<unrepresentable>";

// ============================================================================
// SCALAR KIND
// ============================================================================

/// The four scalar kinds a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Signed 64-bit integer.
    Int,
    /// 64-bit floating point number.
    Float,
    /// UTF-8 text.
    Text,
    /// Boolean.
    Bool,
}

impl ScalarKind {
    /// The view of this kind's zero value (`0`, `0.0`, `""`, `false`).
    #[must_use]
    pub const fn zero_view(self) -> ValueView<'static> {
        match self {
            Self::Int => ValueView::Int(0),
            Self::Float => ValueView::Float(0.0),
            Self::Text => ValueView::Text(""),
            Self::Bool => ValueView::Bool(false),
        }
    }

    /// Human-readable kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "integer",
            Self::Float => "real",
            Self::Text => "text",
            Self::Bool => "boolean",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALUE VIEW
// ============================================================================

/// Borrowed, kind-tagged view of a field's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueView<'a> {
    /// An integer value.
    Int(i64),
    /// A real number.
    Float(f64),
    /// A text value.
    Text(&'a str),
    /// A boolean value.
    Bool(bool),
    /// An absent optional of the given kind.
    Absent(ScalarKind),
}

impl<'a> ValueView<'a> {
    /// The scalar kind behind this view.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Int(_) => ScalarKind::Int,
            Self::Float(_) => ScalarKind::Float,
            Self::Text(_) => ScalarKind::Text,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Absent(kind) => *kind,
        }
    }

    /// Canonical text form of the value.
    ///
    /// Absent optionals render as the empty string.
    #[must_use]
    pub fn canonical_text(&self) -> Cow<'a, str> {
        match *self {
            Self::Int(v) => Cow::Owned(v.to_string()),
            Self::Float(v) => Cow::Owned(render_float(v)),
            Self::Text(v) => Cow::Borrowed(v),
            Self::Bool(v) => Cow::Borrowed(if v { "true" } else { "false" }),
            Self::Absent(_) => Cow::Borrowed(""),
        }
    }
}

/// Renders a real number with a mandatory fractional part (`18` -> `"18.0"`).
pub(crate) fn render_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

// ============================================================================
// SCALAR
// ============================================================================

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for bool {}
    impl<T: Sealed> Sealed for Option<T> {}
}

pub(crate) use sealed::Sealed;

/// One of the four scalar kinds: `i64`, `f64`, `String`, `bool`.
///
/// The trait is sealed; the set of kinds is closed.
pub trait Scalar: Sealed + Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Kind tag for this type.
    const KIND: ScalarKind;

    /// The kind's zero value.
    fn zero() -> Self;

    /// Borrowed view used by the rule engine.
    fn view(&self) -> ValueView<'_>;

    /// Explicit conversion from a dynamic JSON value.
    fn try_coerce(raw: &Value) -> Result<Self, CoercionError>;

    /// Canonical text form.
    fn render(&self) -> String {
        self.view().canonical_text().into_owned()
    }
}

impl Scalar for i64 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn zero() -> Self {
        0
    }

    fn view(&self) -> ValueView<'_> {
        ValueView::Int(*self)
    }

    fn try_coerce(raw: &Value) -> Result<Self, CoercionError> {
        raw.as_i64()
            .ok_or_else(|| CoercionError::new(Self::KIND, raw))
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn zero() -> Self {
        0.0
    }

    fn view(&self) -> ValueView<'_> {
        ValueView::Float(*self)
    }

    fn try_coerce(raw: &Value) -> Result<Self, CoercionError> {
        raw.as_f64()
            .ok_or_else(|| CoercionError::new(Self::KIND, raw))
    }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::Text;

    fn zero() -> Self {
        Self::new()
    }

    fn view(&self) -> ValueView<'_> {
        ValueView::Text(self)
    }

    fn try_coerce(raw: &Value) -> Result<Self, CoercionError> {
        raw.as_str()
            .map(str::to_owned)
            .ok_or_else(|| CoercionError::new(Self::KIND, raw))
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn zero() -> Self {
        false
    }

    fn view(&self) -> ValueView<'_> {
        ValueView::Bool(*self)
    }

    fn try_coerce(raw: &Value) -> Result<Self, CoercionError> {
        raw.as_bool()
            .ok_or_else(|| CoercionError::new(Self::KIND, raw))
    }
}

/// Best-effort conversion of a JSON value into a scalar kind.
///
/// Falls back to the kind's zero value on mismatch. This is a safety net,
/// never a way to reject input: use rules for that.
pub fn coerce<T: Scalar>(raw: &Value) -> T {
    match T::try_coerce(raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(%error, "coercion fell back to zero value");
            T::zero()
        }
    }
}

/// Renders a JSON scalar in its canonical text form.
///
/// Returns [`UNREPRESENTABLE`] for `null`, arrays and objects.
pub fn stringify(raw: &Value) -> String {
    match raw {
        Value::Bool(v) => v.to_string(),
        Value::Number(n) if n.is_f64() => n.as_f64().map_or_else(|| n.to_string(), render_float),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Null | Value::Array(_) | Value::Object(_) => UNREPRESENTABLE.to_owned(),
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// Anything a field can hold: a [`Scalar`] or an `Option` of one.
///
/// Implemented for exactly eight types: the four scalars and their `Option`s.
pub trait FieldValue: Sealed + Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The underlying scalar kind.
    type Scalar: Scalar;

    /// Borrowed view used by the rule engine.
    fn view(&self) -> ValueView<'_>;

    /// Builds a value from JSON, falling back like [`coerce`].
    ///
    /// Optional kinds map `null` and mismatches to `None`.
    fn from_json(raw: &Value) -> Self;

    /// Text used when this value appears in an error message.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_coerce_matching_kinds() {
        assert_eq!(coerce::<i64>(&json!(7)), 7);
        assert_eq!(coerce::<f64>(&json!(2.5)), 2.5);
        assert_eq!(coerce::<f64>(&json!(3)), 3.0);
        assert_eq!(coerce::<String>(&json!("hi")), "hi");
        assert!(coerce::<bool>(&json!(true)));
    }

    #[test]
    fn test_coerce_falls_back_to_zero() {
        assert_eq!(coerce::<i64>(&json!("7")), 0);
        assert_eq!(coerce::<i64>(&json!(7.5)), 0);
        assert_eq!(coerce::<f64>(&json!(null)), 0.0);
        assert_eq!(coerce::<String>(&json!(12)), "");
        assert!(!coerce::<bool>(&json!([true])));
    }

    #[test]
    fn test_try_coerce_reports_kinds() {
        let err = i64::try_coerce(&json!("x")).unwrap_err();
        assert_eq!(err.expected, ScalarKind::Int);
        assert_eq!(err.actual, "string");
        assert_eq!(err.to_string(), "cannot coerce string into integer");
    }

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(stringify(&json!(18)), "18");
        assert_eq!(stringify(&json!(18.0)), "18.0");
        assert_eq!(stringify(&json!(0.1)), "0.1");
        assert_eq!(stringify(&json!("abc")), "abc");
        assert_eq!(stringify(&json!(false)), "false");
    }

    #[test]
    fn test_optional_absent_uses_scalar_kind() {
        assert_eq!(
            <<Option<String> as FieldValue>::Scalar as Scalar>::KIND,
            ScalarKind::Text
        );
        assert_eq!(
            FieldValue::view(&None::<f64>),
            ValueView::Absent(ScalarKind::Float)
        );
        assert_eq!(
            <Option<i64> as FieldValue>::from_json(&json!("7")),
            None
        );
        assert_eq!(FieldValue::describe(&None::<bool>), "none");
    }

    #[test]
    fn test_stringify_integers_beyond_i64() {
        assert_eq!(stringify(&json!(u64::MAX)), "18446744073709551615");
        assert_eq!(stringify(&json!(i64::MIN)), "-9223372036854775808");
    }

    #[test]
    fn test_stringify_unrepresentable() {
        assert_eq!(stringify(&json!(null)), UNREPRESENTABLE);
        assert_eq!(stringify(&json!([1, 2])), UNREPRESENTABLE);
        assert_eq!(stringify(&json!({"a": 1})), UNREPRESENTABLE);
    }

    #[test]
    fn test_canonical_text_per_kind() {
        assert_eq!(ValueView::Int(-3).canonical_text(), "-3");
        assert_eq!(ValueView::Float(21.0).canonical_text(), "21.0");
        assert_eq!(ValueView::Float(0.25).canonical_text(), "0.25");
        assert_eq!(ValueView::Text(" a ").canonical_text(), " a ");
        assert_eq!(ValueView::Bool(true).canonical_text(), "true");
        assert_eq!(ValueView::Absent(ScalarKind::Int).canonical_text(), "");
    }

    #[test]
    fn test_render_non_finite() {
        assert_eq!(render_float(f64::NAN), "NaN");
        assert_eq!(render_float(f64::INFINITY), "inf");
    }

    #[test]
    fn test_zero_views() {
        assert_eq!(ScalarKind::Int.zero_view(), ValueView::Int(0));
        assert_eq!(ScalarKind::Text.zero_view(), ValueView::Text(""));
        assert_eq!(ValueView::Absent(ScalarKind::Bool).kind(), ScalarKind::Bool);
    }
}
