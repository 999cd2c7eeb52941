//! Raw form values and the typed values written into them.

use serde::{Deserialize, Serialize};

use super::{Field, FormError};

/// The complete set of values held by the form.
///
/// `region` is derived from `postal_code` by the form model; code outside
/// this crate can read it but cannot set it through the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub accepted_terms: bool,
    pub comment: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub postal_code: String,
    pub region: String,
    pub r#type: String,
    pub conditions: Vec<String>,
    pub desired_date: String,
}

/// A value written to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    /// Ordered multi-select; duplicates are dropped on write
    List(Vec<String>),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
            FieldValue::List(_) => "list",
        }
    }

    /// Build a value for `field` from user-entered text.
    ///
    /// Flags accept `true/false`, `yes/no`, `si/sí/no`, `1/0` and `on/off`.
    /// Lists are comma-separated; blank entries are skipped.
    pub fn parse_for(field: Field, raw: &str) -> Result<Self, FormError> {
        match field {
            Field::AcceptedTerms => parse_flag(raw).map(FieldValue::Flag),
            Field::Conditions => Ok(FieldValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            _ => Ok(FieldValue::Text(raw.to_string())),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

fn parse_flag(raw: &str) -> Result<bool, FormError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "si" | "sí" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" | "" => Ok(false),
        _ => Err(FormError::InvalidFlag(raw.to_string())),
    }
}

/// Keep the first occurrence of each entry, preserving order.
fn dedup_ordered(items: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

impl FormValues {
    /// Store `value` in `field`. Writing `region` is rejected.
    pub(crate) fn write(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        let expected = match field {
            Field::Region => return Err(FormError::ReadOnlyField(field)),
            Field::AcceptedTerms => "flag",
            Field::Conditions => "list",
            _ => "text",
        };

        match (field, value) {
            (Field::AcceptedTerms, FieldValue::Flag(flag)) => self.accepted_terms = flag,
            (Field::Conditions, FieldValue::List(items)) => self.conditions = dedup_ordered(items),
            (Field::Name, FieldValue::Text(text)) => self.name = text,
            (Field::Email, FieldValue::Text(text)) => self.email = text,
            (Field::Phone, FieldValue::Text(text)) => self.phone = text,
            (Field::PostalCode, FieldValue::Text(text)) => self.postal_code = text,
            (Field::Type, FieldValue::Text(text)) => self.r#type = text,
            (Field::DesiredDate, FieldValue::Text(text)) => self.desired_date = text,
            (Field::Comment, FieldValue::Text(text)) => self.comment = text,
            (field, value) => {
                return Err(FormError::TypeMismatch {
                    field,
                    expected,
                    found: value.kind(),
                })
            }
        }

        Ok(())
    }

    /// Text content of a text field, `None` for flag and list fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::PostalCode => Some(&self.postal_code),
            Field::Region => Some(&self.region),
            Field::Type => Some(&self.r#type),
            Field::DesiredDate => Some(&self.desired_date),
            Field::Comment => Some(&self.comment),
            Field::AcceptedTerms | Field::Conditions => None,
        }
    }
}
