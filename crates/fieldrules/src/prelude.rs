//! Prelude module for convenient imports.
//!
//! ```
//! use fieldrules::prelude::*;
//!
//! let age = int_field("age", 21).required().to_float().min_size(18.0);
//! assert!(age.validate().is_ok());
//! ```

pub use crate::foundation::{
    CoercionError, FieldValue, PatternError, Scalar, ScalarKind, Validate, ValidationFailure,
    ValidationFailures, ValidationOutcome, ValueView, coerce, stringify,
};

pub use crate::field::{
    Field, Predicate, Rule, SizeBounded, TextValue, bool_field, float_field, int_field,
    optional_bool_field, optional_float_field, optional_int_field, optional_string_field,
    string_field,
};

pub use crate::batch::{FieldReport, validate_many};

pub use crate::report::{
    ErrorFormat, Serializable, failures_to_value, has_errors, serializables_to_string,
    serializables_to_value, to_serializable, to_serializable_list,
};
