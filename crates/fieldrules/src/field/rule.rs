//! Rule values attachable to a field.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::{SizeBounded, TextValue};
use crate::foundation::{FieldValue, PatternError};

/// A caller-supplied check over a field's value.
pub type Predicate<V> = Arc<dyn Fn(&V) -> bool + Send + Sync>;

#[derive(Clone)]
pub(crate) enum RuleKind<V> {
    Required,
    MinSize(f64),
    MaxSize(f64),
    MinLength(usize),
    MaxLength(usize),
    Eq {
        label: String,
        value: V,
    },
    NotEq {
        label: String,
        value: V,
    },
    Pattern {
        label: String,
        matcher: Regex,
        message: String,
    },
    Predicate {
        label: String,
        check: Predicate<V>,
        message: String,
    },
}

/// One validation condition for a field holding `V`.
///
/// Rules are built through the constructors below, which only exist for
/// the value kinds a rule makes sense for: size bounds need a
/// [`SizeBounded`] kind and patterns a [`TextValue`] kind.
///
/// # Examples
///
/// ```
/// use fieldrules::prelude::*;
///
/// let field = string_field("code", "ab")
///     .with_rule(Rule::required())
///     .with_rule(Rule::min_length(3));
///
/// assert_eq!(field.rules()[1].tag(), "min_length");
/// assert!(field.validate().is_err());
/// ```
#[derive(Clone)]
pub struct Rule<V> {
    pub(crate) kind: RuleKind<V>,
}

impl<V> Rule<V> {
    const fn from_kind(kind: RuleKind<V>) -> Self {
        Self { kind }
    }

    /// Tag reported when this rule fails.
    ///
    /// Labelled rules report their label, or the default tag when the label
    /// is empty.
    pub fn tag(&self) -> Cow<'static, str> {
        let (label, default) = match &self.kind {
            RuleKind::Required => return Cow::Borrowed("required"),
            RuleKind::MinSize(_) => return Cow::Borrowed("min_size"),
            RuleKind::MaxSize(_) => return Cow::Borrowed("max_size"),
            RuleKind::MinLength(_) => return Cow::Borrowed("min_length"),
            RuleKind::MaxLength(_) => return Cow::Borrowed("max_length"),
            RuleKind::Eq { label, .. } => (label, "eq"),
            RuleKind::NotEq { label, .. } => (label, "not_eq"),
            RuleKind::Pattern { label, .. } => (label, "pattern"),
            RuleKind::Predicate { label, .. } => (label, "custom"),
        };
        if label.is_empty() {
            Cow::Borrowed(default)
        } else {
            Cow::Owned(label.clone())
        }
    }

    /// Moves the rule to another value kind.
    ///
    /// `forward` converts stored comparands; predicates are wrapped so they
    /// receive `backward` of the new value.
    pub(crate) fn convert<W>(self, forward: fn(V) -> W, backward: fn(&W) -> V) -> Rule<W>
    where
        V: 'static,
        W: 'static,
    {
        let kind = match self.kind {
            RuleKind::Required => RuleKind::Required,
            RuleKind::MinSize(min) => RuleKind::MinSize(min),
            RuleKind::MaxSize(max) => RuleKind::MaxSize(max),
            RuleKind::MinLength(min) => RuleKind::MinLength(min),
            RuleKind::MaxLength(max) => RuleKind::MaxLength(max),
            RuleKind::Eq { label, value } => RuleKind::Eq {
                label,
                value: forward(value),
            },
            RuleKind::NotEq { label, value } => RuleKind::NotEq {
                label,
                value: forward(value),
            },
            RuleKind::Pattern {
                label,
                matcher,
                message,
            } => RuleKind::Pattern {
                label,
                matcher,
                message,
            },
            RuleKind::Predicate {
                label,
                check,
                message,
            } => {
                let check: Predicate<W> = Arc::new(move |value: &W| check(&backward(value)));
                RuleKind::Predicate {
                    label,
                    check,
                    message,
                }
            }
        };
        Rule::from_kind(kind)
    }
}

impl<V: FieldValue> Rule<V> {
    /// The value must be present (see [`is_present`](crate::validators::is_present)).
    #[must_use]
    pub const fn required() -> Self {
        Self::from_kind(RuleKind::Required)
    }

    /// Trimmed text length must be at least `min`.
    #[must_use]
    pub const fn min_length(min: usize) -> Self {
        Self::from_kind(RuleKind::MinLength(min))
    }

    /// Trimmed text length must be at most `max`.
    #[must_use]
    pub const fn max_length(max: usize) -> Self {
        Self::from_kind(RuleKind::MaxLength(max))
    }

    /// The value must equal `value`. A non-empty `label` replaces the `eq` tag.
    pub fn eq(label: impl Into<String>, value: V) -> Self {
        Self::from_kind(RuleKind::Eq {
            label: label.into(),
            value,
        })
    }

    /// The value must differ from `value`. A non-empty `label` replaces the
    /// `not_eq` tag.
    pub fn not_eq(label: impl Into<String>, value: V) -> Self {
        Self::from_kind(RuleKind::NotEq {
            label: label.into(),
            value,
        })
    }

    /// The value must satisfy `check`.
    pub fn predicate<F>(label: impl Into<String>, check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self::from_kind(RuleKind::Predicate {
            label: label.into(),
            check: Arc::new(check),
            message: message.into(),
        })
    }
}

impl<V: SizeBounded> Rule<V> {
    /// Magnitude must be at least `min` (inclusive).
    #[must_use]
    pub const fn min_size(min: f64) -> Self {
        Self::from_kind(RuleKind::MinSize(min))
    }

    /// Magnitude must be at most `max` (inclusive).
    #[must_use]
    pub const fn max_size(max: f64) -> Self {
        Self::from_kind(RuleKind::MaxSize(max))
    }
}

impl<V: TextValue> Rule<V> {
    /// The text must match a compiled pattern.
    pub fn pattern(label: impl Into<String>, matcher: Regex, message: impl Into<String>) -> Self {
        Self::from_kind(RuleKind::Pattern {
            label: label.into(),
            matcher,
            message: message.into(),
        })
    }

    /// Compiles `pattern` and builds a [`Rule::pattern`] from it.
    pub fn raw_pattern(
        label: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let matcher = crate::validators::compile(pattern)?;
        Ok(Self::pattern(label, matcher, message))
    }
}

impl<V: fmt::Debug> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuleKind::Required => f.write_str("Required"),
            RuleKind::MinSize(min) => f.debug_tuple("MinSize").field(min).finish(),
            RuleKind::MaxSize(max) => f.debug_tuple("MaxSize").field(max).finish(),
            RuleKind::MinLength(min) => f.debug_tuple("MinLength").field(min).finish(),
            RuleKind::MaxLength(max) => f.debug_tuple("MaxLength").field(max).finish(),
            RuleKind::Eq { label, value } => f
                .debug_struct("Eq")
                .field("label", label)
                .field("value", value)
                .finish(),
            RuleKind::NotEq { label, value } => f
                .debug_struct("NotEq")
                .field("label", label)
                .field("value", value)
                .finish(),
            RuleKind::Pattern {
                label,
                matcher,
                message,
            } => f
                .debug_struct("Pattern")
                .field("label", label)
                .field("pattern", &matcher.as_str())
                .field("message", message)
                .finish(),
            RuleKind::Predicate { label, message, .. } => f
                .debug_struct("Predicate")
                .field("label", label)
                .field("check", &"<function>")
                .field("message", message)
                .finish(),
        }
    }
}
