//! # Optica - appointment request form
//!
//! Optica collects a customer's contact details and an appointment request,
//! validates every field, and produces either a list of error messages or a
//! display-ready summary.
//!
//! ## Core Concepts
//!
//! - **Validators**: one pure function per field, returning a
//!   [`validation::ValidationOutcome`]
//! - **Region lookup**: the province is derived from the first two digits of
//!   the postal code
//! - **Form model**: holds the values, recomputes the region on postal-code
//!   edits, and reports overall validity
//! - **Submission flow**: turns a form into an error list or a summary
//!
//! ## Modules
//!
//! - [`region`] - Postal-code to province table
//! - [`validation`] - Per-field validators and violation kinds
//! - [`form`] - Form values and the form model
//! - [`messages`] - Spanish message templates
//! - [`submission`] - Submit flow and success payload
//! - [`config`] - `.optica/config.md` loading
//! - [`formatters`] - Terminal rendering
//!
//! ## Example
//!
//! ```
//! use optica::form::{Field, FormModel};
//! use optica::submission::SubmissionFlow;
//!
//! let mut form = FormModel::new();
//! form.set_field(Field::PostalCode, "28001").unwrap();
//! assert_eq!(form.region(), "Madrid");
//!
//! let result = SubmissionFlow::new().submit(&form);
//! assert!(result.errors().contains(&"Nombre es obligatorio".to_string()));
//! ```

pub mod config;
pub mod form;
pub mod formatters;
pub mod messages;
pub mod region;
pub mod submission;
pub mod validation;

pub use region::region_for;
