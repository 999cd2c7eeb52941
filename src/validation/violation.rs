//! Violation kinds and per-field validation outcomes.

use serde::Serialize;
use std::fmt;

/// The closed set of ways a field value can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Field is mandatory and empty (or, for the terms checkbox, unchecked)
    Required,
    /// Value is shorter than `min` characters
    TooShort { min: usize },
    InvalidEmailFormat,
    InvalidPhoneFormat,
    InvalidPostalCodeFormat,
    /// Desired date does not match `dd/mm/yyyy`
    InvalidDateFormat,
    /// Desired date matches the pattern but is not a real calendar day
    InvalidCalendarDate,
    /// Desired date is earlier than today
    DateInPast,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Required => write!(f, "required"),
            ViolationKind::TooShort { min } => write!(f, "too_short({})", min),
            ViolationKind::InvalidEmailFormat => write!(f, "invalid_email_format"),
            ViolationKind::InvalidPhoneFormat => write!(f, "invalid_phone_format"),
            ViolationKind::InvalidPostalCodeFormat => write!(f, "invalid_postal_code_format"),
            ViolationKind::InvalidDateFormat => write!(f, "invalid_date_format"),
            ViolationKind::InvalidCalendarDate => write!(f, "invalid_calendar_date"),
            ViolationKind::DateInPast => write!(f, "date_in_past"),
        }
    }
}

/// Result of running a single field validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "violation", rename_all = "snake_case")]
pub enum ValidationOutcome {
    #[default]
    Valid,
    Invalid(ViolationKind),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The violation, if the outcome is invalid.
    pub fn violation(&self) -> Option<ViolationKind> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(kind) => Some(*kind),
        }
    }
}

impl From<ViolationKind> for ValidationOutcome {
    fn from(kind: ViolationKind) -> Self {
        ValidationOutcome::Invalid(kind)
    }
}
