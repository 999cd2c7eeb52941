//! Pure per-field predicates.
//!
//! Every validator is total: it never fails, it only classifies. Required
//! checks always run before format checks, so an empty mandatory field is
//! reported as [`ViolationKind::Required`] and nothing else.

use regex::Regex;
use std::sync::LazyLock;

use super::violation::{ValidationOutcome, ViolationKind};

/// Default minimum number of characters for the name field.
pub const NAME_MIN_LENGTH: usize = 3;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

// Mobile and landline numbers: 9 digits starting with 6, 7 or 9
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[679][0-9]{8}$").expect("valid phone regex"));

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("valid postal code regex"));

/// The terms checkbox must be ticked.
pub fn validate_accepted_terms(accepted: bool) -> ValidationOutcome {
    if accepted {
        ValidationOutcome::Valid
    } else {
        ViolationKind::Required.into()
    }
}

/// Name is mandatory and at least [`NAME_MIN_LENGTH`] characters long.
pub fn validate_name(name: &str) -> ValidationOutcome {
    validate_name_with_min(name, NAME_MIN_LENGTH)
}

/// Name check with a configurable minimum length.
pub fn validate_name_with_min(name: &str, min: usize) -> ValidationOutcome {
    if name.is_empty() {
        return ViolationKind::Required.into();
    }
    if name.chars().count() < min {
        return ViolationKind::TooShort { min }.into();
    }
    ValidationOutcome::Valid
}

pub fn validate_email(email: &str) -> ValidationOutcome {
    if email.is_empty() {
        return ViolationKind::Required.into();
    }
    if !EMAIL_RE.is_match(email) {
        return ViolationKind::InvalidEmailFormat.into();
    }
    ValidationOutcome::Valid
}

/// Phone is optional; when present it must be a 9-digit Spanish number.
pub fn validate_phone(phone: &str) -> ValidationOutcome {
    if phone.is_empty() || PHONE_RE.is_match(phone) {
        ValidationOutcome::Valid
    } else {
        ViolationKind::InvalidPhoneFormat.into()
    }
}

pub fn validate_postal_code(postal_code: &str) -> ValidationOutcome {
    if postal_code.is_empty() {
        return ViolationKind::Required.into();
    }
    if !POSTAL_CODE_RE.is_match(postal_code) {
        return ViolationKind::InvalidPostalCodeFormat.into();
    }
    ValidationOutcome::Valid
}

/// Appointment type only needs to be chosen.
pub fn validate_type(appointment_type: &str) -> ValidationOutcome {
    if appointment_type.is_empty() {
        ViolationKind::Required.into()
    } else {
        ValidationOutcome::Valid
    }
}

/// Free text; always valid.
pub fn validate_comment(_comment: &str) -> ValidationOutcome {
    ValidationOutcome::Valid
}

/// Any selection, including none, is valid.
pub fn validate_conditions(_conditions: &[String]) -> ValidationOutcome {
    ValidationOutcome::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(kind: ViolationKind) -> ValidationOutcome {
        ValidationOutcome::Invalid(kind)
    }

    // =========================================================================
    // ACCEPTED TERMS
    // =========================================================================

    #[test]
    fn test_accepted_terms() {
        assert_eq!(validate_accepted_terms(true), ValidationOutcome::Valid);
        assert_eq!(
            validate_accepted_terms(false),
            invalid(ViolationKind::Required)
        );
    }

    // =========================================================================
    // NAME
    // =========================================================================

    #[test]
    fn test_name_required_and_min_length() {
        assert_eq!(validate_name(""), invalid(ViolationKind::Required));
        assert_eq!(
            validate_name("Al"),
            invalid(ViolationKind::TooShort { min: 3 })
        );
        assert_eq!(validate_name("Ana"), ValidationOutcome::Valid);
        assert_eq!(validate_name("Ana García"), ValidationOutcome::Valid);
    }

    #[test]
    fn test_name_length_counts_characters() {
        // "Íñi" is three characters but six bytes
        assert_eq!(validate_name("Íñi"), ValidationOutcome::Valid);
        assert_eq!(
            validate_name("Ñu"),
            invalid(ViolationKind::TooShort { min: 3 })
        );
    }

    #[test]
    fn test_name_whitespace_is_not_empty() {
        assert_eq!(
            validate_name(" "),
            invalid(ViolationKind::TooShort { min: 3 })
        );
    }

    #[test]
    fn test_name_custom_minimum() {
        assert_eq!(
            validate_name_with_min("Luis", 5),
            invalid(ViolationKind::TooShort { min: 5 })
        );
        assert_eq!(validate_name_with_min("Lucas", 5), ValidationOutcome::Valid);
    }

    // =========================================================================
    // EMAIL
    // =========================================================================

    #[test]
    fn test_email() {
        assert_eq!(validate_email("a@b.com"), ValidationOutcome::Valid);
        assert_eq!(
            validate_email("nombre.apellido+citas@optica-centro.es"),
            ValidationOutcome::Valid
        );
        assert_eq!(validate_email(""), invalid(ViolationKind::Required));
        assert_eq!(
            validate_email("not-an-email"),
            invalid(ViolationKind::InvalidEmailFormat)
        );
    }

    #[test]
    fn test_email_rejects_short_or_missing_suffix() {
        assert_eq!(
            validate_email("a@b.c"),
            invalid(ViolationKind::InvalidEmailFormat)
        );
        assert_eq!(
            validate_email("a@localhost"),
            invalid(ViolationKind::InvalidEmailFormat)
        );
        assert_eq!(
            validate_email("@b.com"),
            invalid(ViolationKind::InvalidEmailFormat)
        );
        assert_eq!(
            validate_email("a b@c.com"),
            invalid(ViolationKind::InvalidEmailFormat)
        );
    }

    // =========================================================================
    // PHONE
    // =========================================================================

    #[test]
    fn test_phone_optional() {
        assert_eq!(validate_phone(""), ValidationOutcome::Valid);
    }

    #[test]
    fn test_phone_leading_digit() {
        assert_eq!(validate_phone("612345678"), ValidationOutcome::Valid);
        assert_eq!(validate_phone("712345678"), ValidationOutcome::Valid);
        assert_eq!(validate_phone("912345678"), ValidationOutcome::Valid);
        assert_eq!(
            validate_phone("512345678"),
            invalid(ViolationKind::InvalidPhoneFormat)
        );
        assert_eq!(
            validate_phone("812345678"),
            invalid(ViolationKind::InvalidPhoneFormat)
        );
    }

    #[test]
    fn test_phone_length_and_digits() {
        assert_eq!(
            validate_phone("61234"),
            invalid(ViolationKind::InvalidPhoneFormat)
        );
        assert_eq!(
            validate_phone("6123456789"),
            invalid(ViolationKind::InvalidPhoneFormat)
        );
        assert_eq!(
            validate_phone("61234567a"),
            invalid(ViolationKind::InvalidPhoneFormat)
        );
        assert_eq!(
            validate_phone("612 345 678"),
            invalid(ViolationKind::InvalidPhoneFormat)
        );
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits after a valid leading 6
        assert_eq!(
            validate_phone("6١٢٣٤٥٦٧٨"),
            invalid(ViolationKind::InvalidPhoneFormat)
        );
    }

    // =========================================================================
    // POSTAL CODE
    // =========================================================================

    #[test]
    fn test_postal_code() {
        assert_eq!(validate_postal_code("28001"), ValidationOutcome::Valid);
        assert_eq!(validate_postal_code(""), invalid(ViolationKind::Required));
        assert_eq!(
            validate_postal_code("2800"),
            invalid(ViolationKind::InvalidPostalCodeFormat)
        );
        assert_eq!(
            validate_postal_code("280011"),
            invalid(ViolationKind::InvalidPostalCodeFormat)
        );
        assert_eq!(
            validate_postal_code("28a01"),
            invalid(ViolationKind::InvalidPostalCodeFormat)
        );
    }

    #[test]
    fn test_postal_code_unknown_prefix_is_still_valid_format() {
        assert_eq!(validate_postal_code("99999"), ValidationOutcome::Valid);
    }

    // =========================================================================
    // TYPE, COMMENT, CONDITIONS
    // =========================================================================

    #[test]
    fn test_type_required() {
        assert_eq!(validate_type(""), invalid(ViolationKind::Required));
        assert_eq!(validate_type("Revisión visual"), ValidationOutcome::Valid);
    }

    #[test]
    fn test_free_fields_always_valid() {
        assert_eq!(validate_comment(""), ValidationOutcome::Valid);
        assert_eq!(validate_comment("Llevo gafas desde 2010"), ValidationOutcome::Valid);
        assert_eq!(validate_conditions(&[]), ValidationOutcome::Valid);
        assert_eq!(
            validate_conditions(&["Miopía".to_string(), "Astigmatismo".to_string()]),
            ValidationOutcome::Valid
        );
    }
}
