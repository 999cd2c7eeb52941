//! Field-level validation rules for the appointment form.
//!
//! Each validator is an independent pure function from a field value to a
//! [`ValidationOutcome`]. The form model composes them; message rendering
//! lives in [`crate::messages`].

pub mod date;
pub mod fields;
pub mod violation;

pub use date::{format_desired_date, parse_desired_date, validate_desired_date, DATE_FORMAT};
pub use fields::*;
pub use violation::{ValidationOutcome, ViolationKind};
