//! `pattern`: regular expression match against the value's text.

use regex::Regex;

use super::label_or;
use crate::foundation::{PatternError, ValidationFailure, ValueView};

/// Compiles pattern text into a matcher.
///
/// # Examples
///
/// ```
/// use fieldrules::validators::compile;
///
/// let digits = compile(r"^\d+$").unwrap();
/// assert!(digits.is_match("123"));
/// assert!(compile("(").is_err());
/// ```
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| {
        tracing::warn!(pattern, error = %source, "pattern failed to compile");
        PatternError::new(pattern, source)
    })
}

/// Passes when the matcher finds a match in the value's canonical text,
/// honouring whatever anchors the pattern itself carries.
pub(super) fn pattern(
    field: &str,
    label: &str,
    matcher: &Regex,
    message: &str,
    view: ValueView<'_>,
) -> Result<(), ValidationFailure> {
    if matcher.is_match(&view.canonical_text()) {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            field,
            label_or(label, "pattern"),
            message.to_owned(),
        )
        .with_param("pattern", matcher.as_str().to_owned()))
    }
}
