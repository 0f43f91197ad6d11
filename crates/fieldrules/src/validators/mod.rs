//! Rule evaluation engine.
//!
//! One module per rule family. Each exposes the measurement it is built on
//! ([`is_present`], [`magnitude`], [`text_length`]) and a checker returning
//! `Result<(), ValidationFailure>`. Nothing here mutates the field.
//!
//! The engine is fully general: every rule is defined for every value kind.
//! Which rules a caller may attach to which kind is decided by the builder
//! surface in [`field`](crate::field).

mod equality;
mod length;
mod pattern;
mod predicate;
mod presence;
mod size;

use std::borrow::Cow;

pub use length::text_length;
pub use pattern::compile;
pub use presence::is_present;
pub use size::magnitude;

use crate::field::{Rule, RuleKind};
use crate::foundation::{FieldValue, ValidationFailure};

/// Tag for a labelled rule: the label when non-empty, else the default.
fn label_or(label: &str, default: &'static str) -> Cow<'static, str> {
    if label.is_empty() {
        Cow::Borrowed(default)
    } else {
        Cow::Owned(label.to_owned())
    }
}

/// Evaluates one rule against a field's value.
///
/// Returns `None` when the rule passes.
pub(crate) fn evaluate<V: FieldValue>(
    rule: &Rule<V>,
    field: &str,
    value: &V,
) -> Option<ValidationFailure> {
    let view = value.view();
    let outcome = match &rule.kind {
        RuleKind::Required => presence::required(field, view),
        RuleKind::MinSize(min) => size::min_size(field, view, *min),
        RuleKind::MaxSize(max) => size::max_size(field, view, *max),
        RuleKind::MinLength(min) => length::min_length(field, view, *min),
        RuleKind::MaxLength(max) => length::max_length(field, view, *max),
        RuleKind::Eq {
            label,
            value: expected,
        } => equality::eq(field, label, value, expected),
        RuleKind::NotEq {
            label,
            value: unexpected,
        } => equality::not_eq(field, label, value, unexpected),
        RuleKind::Pattern {
            label,
            matcher,
            message,
        } => pattern::pattern(field, label, matcher, message, view),
        RuleKind::Predicate {
            label,
            check,
            message,
        } => predicate::predicate(field, label, check, message, value),
    };

    match outcome {
        Ok(()) => None,
        Err(failure) => {
            tracing::trace!(field, tag = %failure.tag, "rule failed");
            Some(failure)
        }
    }
}
