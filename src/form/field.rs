//! Field identifiers, human labels, and report order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FormError;

/// Every field of the appointment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    PostalCode,
    /// Derived from the postal code; never written by the user
    Region,
    Type,
    DesiredDate,
    AcceptedTerms,
    Comment,
    Conditions,
}

impl Field {
    /// All fields, in error-report order. Fields that can never be invalid
    /// come last.
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::PostalCode,
        Field::Type,
        Field::DesiredDate,
        Field::AcceptedTerms,
        Field::Region,
        Field::Comment,
        Field::Conditions,
    ];

    /// Identifier as used at the input boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::PostalCode => "postalCode",
            Field::Region => "region",
            Field::Type => "type",
            Field::DesiredDate => "desiredDate",
            Field::AcceptedTerms => "acceptedTerms",
            Field::Comment => "comment",
            Field::Conditions => "conditions",
        }
    }

    /// Human label used in error messages, if the field has one.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Nombre"),
            Field::Email => Some("Email"),
            Field::Phone => Some("Teléfono"),
            Field::PostalCode => Some("Código Postal"),
            Field::Type => Some("Tipo"),
            Field::DesiredDate => Some("Fecha deseada"),
            Field::AcceptedTerms => Some("Aceptar condiciones"),
            Field::Region | Field::Comment | Field::Conditions => None,
        }
    }

    /// Label, falling back to the raw identifier.
    pub fn display_label(&self) -> &'static str {
        self.label().unwrap_or_else(|| self.as_str())
    }

    /// Whether the user may write this field directly.
    pub fn is_writable(&self) -> bool {
        !matches!(self, Field::Region)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    /// Accepts camelCase identifiers and their snake_case or kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "postalcode" => Ok(Field::PostalCode),
            "region" => Ok(Field::Region),
            "type" => Ok(Field::Type),
            "desireddate" => Ok(Field::DesiredDate),
            "acceptedterms" => Ok(Field::AcceptedTerms),
            "comment" => Ok(Field::Comment),
            "conditions" => Ok(Field::Conditions),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}
