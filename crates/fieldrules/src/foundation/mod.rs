//! Core types and traits shared by every other module.
//!
//! - **Values**: [`Scalar`], [`FieldValue`], [`ValueView`], [`ScalarKind`]
//! - **Errors**: [`ValidationFailure`], [`ValidationFailures`], [`PatternError`],
//!   [`CoercionError`]
//! - **Traits**: [`Validate`]
//!
//! # Examples
//!
//! ```
//! use fieldrules::foundation::{coerce, stringify};
//! use serde_json::json;
//!
//! assert_eq!(coerce::<i64>(&json!(42)), 42);
//! assert_eq!(coerce::<i64>(&json!("42")), 0);
//! assert_eq!(stringify(&json!(true)), "true");
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{CoercionError, PatternError, ValidationFailure, ValidationFailures};
pub use traits::Validate;
pub use value::{FieldValue, Scalar, ScalarKind, UNREPRESENTABLE, ValueView, coerce, stringify};

/// Result of running every rule attached to a field.
///
/// `Ok` hands back the field untouched; `Err` carries every failing rule in
/// attachment order and is never empty.
pub type ValidationOutcome<V> = Result<crate::field::Field<V>, ValidationFailures>;
