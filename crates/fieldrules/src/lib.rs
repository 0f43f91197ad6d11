//! # fieldrules
//!
//! Declarative, accumulate-all field validation.
//!
//! Wrap a value in a named field, chain rules onto it, then validate. Every
//! rule runs; the result is either the untouched field or the full ordered
//! list of failures, ready to be reported as JSON.
//!
//! ## Quick Start
//!
//! ```
//! use fieldrules::prelude::*;
//!
//! let first_name = string_field("first_name", "").required().min_length(3);
//! let last_name = string_field("last_name", "Smith").max_length(3);
//!
//! let pairs = vec![
//!     to_serializable(&first_name.validate(), "", ErrorFormat::Map),
//!     to_serializable(&last_name.validate(), "renamed_last_name", ErrorFormat::Map),
//! ];
//!
//! assert!(has_errors(&pairs));
//! assert_eq!(
//!     serializables_to_string(&pairs),
//!     r#"{"first_name":{"required":"is required","min_length":"must be at least 3 characters"},"renamed_last_name":{"max_length":"must not be longer than 3 characters"}}"#
//! );
//! ```
//!
//! ## Rules
//!
//! - **Presence**: [`required`](field::Field::required)
//! - **Magnitude**: [`min_size`](field::Field::min_size), [`max_size`](field::Field::max_size)
//! - **Text length**: [`min_length`](field::Field::min_length), [`max_length`](field::Field::max_length)
//! - **Equality**: [`eq`](field::Field::eq), [`not_eq`](field::Field::not_eq)
//! - **Pattern**: [`pattern`](field::Field::pattern), [`raw_pattern`](field::Field::raw_pattern)
//! - **Custom**: [`with_predicate`](field::Field::with_predicate)

// ValidationFailure is returned by value from every rule check; boxing it
// would add an allocation to each failing rule.
#![allow(clippy::result_large_err)]

pub mod batch;
pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod report;
pub mod validators;
