//! Form model for the appointment request.
//!
//! [`FormModel`] owns the current [`FormValues`], derives the region from the
//! postal code on every write, and reports per-field outcomes plus overall
//! validity. It is driven synchronously by whatever layer owns user input,
//! through [`FormModel::set_field`] or [`FormModel::on_field_change`].

use std::fmt;

pub mod clock;
pub mod field;
pub mod model;
pub mod values;

pub use clock::{Clock, FixedClock, SystemClock};
pub use field::Field;
pub use model::{FormModel, FormRules};
pub use values::{FieldValue, FormValues};

/// Misuse of the form model API.
///
/// These are programming or input-plumbing errors, distinct from validation
/// violations, which are ordinary outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No field has this identifier
    UnknownField(String),
    /// Field is derived and cannot be written
    ReadOnlyField(Field),
    /// Value kind does not fit the field
    TypeMismatch {
        field: Field,
        expected: &'static str,
        found: &'static str,
    },
    /// Text could not be read as a yes/no value
    InvalidFlag(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField(name) => write!(f, "Unknown field '{}'", name),
            FormError::ReadOnlyField(field) => {
                write!(f, "Field '{}' is derived and cannot be set", field)
            }
            FormError::TypeMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "Field '{}' expects a {} value, got {}",
                field, expected, found
            ),
            FormError::InvalidFlag(raw) => {
                write!(f, "'{}' is not a yes/no value", raw)
            }
        }
    }
}

impl std::error::Error for FormError {}
