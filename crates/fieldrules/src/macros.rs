//! Internal macros.
//!
//! [`field_kinds!`] stamps out, for each scalar type, the two
//! [`FieldValue`](crate::foundation::FieldValue) impls (bare and `Option`)
//! and the matching pair of field constructors.

/// Implements `FieldValue` for a scalar and its `Option`, and defines the
/// `<kind>_field` / `optional_<kind>_field` constructors.
///
/// ```rust,ignore
/// field_kinds! {
///     i64 => int_field, optional_int_field;
/// }
/// ```
macro_rules! field_kinds {
    ($($scalar:ty => $ctor:ident, $opt_ctor:ident;)+) => {$(
        impl $crate::foundation::FieldValue for $scalar {
            type Scalar = $scalar;

            fn view(&self) -> $crate::foundation::ValueView<'_> {
                $crate::foundation::Scalar::view(self)
            }

            fn from_json(raw: &::serde_json::Value) -> Self {
                $crate::foundation::coerce(raw)
            }

            fn describe(&self) -> String {
                $crate::foundation::Scalar::render(self)
            }
        }

        impl $crate::foundation::FieldValue for Option<$scalar> {
            type Scalar = $scalar;

            fn view(&self) -> $crate::foundation::ValueView<'_> {
                match self {
                    Some(value) => $crate::foundation::Scalar::view(value),
                    None => $crate::foundation::ValueView::Absent(
                        <Self::Scalar as $crate::foundation::Scalar>::KIND,
                    ),
                }
            }

            fn from_json(raw: &::serde_json::Value) -> Self {
                if raw.is_null() {
                    return None;
                }
                match <Self::Scalar as $crate::foundation::Scalar>::try_coerce(raw) {
                    Ok(value) => Some(value),
                    Err(error) => {
                        tracing::debug!(%error, "optional coercion fell back to absent");
                        None
                    }
                }
            }

            fn describe(&self) -> String {
                self.as_ref().map_or_else(
                    || "none".to_owned(),
                    <Self::Scalar as $crate::foundation::Scalar>::render,
                )
            }
        }

        #[doc = concat!("Creates a `", stringify!($scalar), "` field with no rules.")]
        pub fn $ctor(
            name: impl Into<String>,
            value: impl Into<$scalar>,
        ) -> $crate::field::Field<$scalar> {
            $crate::field::Field::new(name, value.into())
        }

        #[doc = concat!("Creates an `Option<", stringify!($scalar), ">` field with no rules.")]
        pub fn $opt_ctor(
            name: impl Into<String>,
            value: Option<$scalar>,
        ) -> $crate::field::Field<Option<$scalar>> {
            $crate::field::Field::new(name, value)
        }
    )+};
}

pub(crate) use field_kinds;
