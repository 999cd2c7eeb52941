//! Human-readable messages for validation violations.
//!
//! Messages are in Spanish, the form's only locale. Each message is the
//! field label followed by a reason, e.g. `Nombre es obligatorio`. The
//! violation set is closed, so every invalid outcome maps to a specific
//! reason and no catch-all text is needed.

use crate::form::Field;
use crate::validation::{ValidationOutcome, ViolationKind};

/// Reason text for a violation, with any context interpolated.
pub fn reason_for(kind: &ViolationKind) -> String {
    match kind {
        ViolationKind::Required => "es obligatorio".to_string(),
        ViolationKind::TooShort { min } => format!("debe tener al menos {} caracteres", min),
        ViolationKind::InvalidEmailFormat => "no tiene un formato válido".to_string(),
        ViolationKind::InvalidPhoneFormat => {
            "debe empezar por 6, 7 o 9 y tener 9 dígitos".to_string()
        }
        ViolationKind::InvalidPostalCodeFormat => "debe tener 5 dígitos".to_string(),
        ViolationKind::InvalidDateFormat => "debe tener el formato dd/mm/aaaa".to_string(),
        ViolationKind::InvalidCalendarDate => "no es una fecha válida".to_string(),
        ViolationKind::DateInPast => "no puede ser una fecha pasada".to_string(),
    }
}

/// Full message for a field's violation: `"{label} {reason}"`.
pub fn message_for(field: Field, kind: &ViolationKind) -> String {
    format!("{} {}", field.display_label(), reason_for(kind))
}

/// Message for an outcome; `None` when the outcome is valid.
pub fn outcome_message(field: Field, outcome: &ValidationOutcome) -> Option<String> {
    outcome.violation().map(|kind| message_for(field, &kind))
}
