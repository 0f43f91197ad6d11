//! The object-safe trait every field implements.

use super::error::ValidationFailure;

/// A named value that can be checked against its attached rules.
///
/// [`Field<V>`](crate::field::Field) is generic over its value kind; this
/// trait erases that parameter so fields of different kinds can be validated
/// together (see [`validate_many`](crate::batch::validate_many)).
///
/// # Examples
///
/// ```
/// use fieldrules::prelude::*;
///
/// let name = string_field("name", "").required();
/// let age = int_field("age", 30).required();
/// let fields: [&dyn Validate; 2] = [&name, &age];
///
/// let failing: Vec<_> = fields.iter().filter(|f| !f.failures().is_empty()).collect();
/// assert_eq!(failing.len(), 1);
/// assert_eq!(failing[0].name(), "name");
/// ```
pub trait Validate {
    /// The field's name.
    fn name(&self) -> &str;

    /// Evaluates every attached rule and returns one failure per failing
    /// rule, in attachment order. Empty when everything passed.
    fn failures(&self) -> Vec<ValidationFailure>;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn failures(&self) -> Vec<ValidationFailure> {
        (**self).failures()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn failures(&self) -> Vec<ValidationFailure> {
        (**self).failures()
    }
}
