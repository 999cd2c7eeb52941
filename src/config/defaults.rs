//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::form::FormRules;
use crate::submission::SummaryFallbacks;
use crate::validation::NAME_MIN_LENGTH;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_name_min_length, usize, NAME_MIN_LENGTH);
default_fn!(default_phone_fallback, String, "No especificado".to_string());
default_fn!(default_conditions_fallback, String, "Ninguna".to_string());
default_fn!(default_comment_fallback, String, "Sin comentarios".to_string());
default_fn!(default_conditions_separator, String, ", ".to_string());
default_fn!(
    default_appointment_types,
    Vec<String>,
    vec![
        "Revisión visual".to_string(),
        "Adaptación de lentillas".to_string(),
        "Graduación".to_string(),
        "Otro".to_string(),
    ]
);
default_fn!(
    default_conditions,
    Vec<String>,
    vec![
        "Miopía".to_string(),
        "Hipermetropía".to_string(),
        "Astigmatismo".to_string(),
        "Presbicia".to_string(),
    ]
);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Tunables for the validation rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    /// Minimum characters in the name field (default: 3)
    #[serde(default = "default_name_min_length")]
    pub name_min_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_min_length: default_name_min_length(),
        }
    }
}

impl FormConfig {
    pub fn rules(&self) -> FormRules {
        FormRules {
            name_min_length: self.name_min_length,
        }
    }
}

/// Text shown in the summary for optional values left empty
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_phone_fallback")]
    pub phone_fallback: String,
    #[serde(default = "default_conditions_fallback")]
    pub conditions_fallback: String,
    #[serde(default = "default_comment_fallback")]
    pub comment_fallback: String,
    /// Joins selected conditions (default: ", ")
    #[serde(default = "default_conditions_separator")]
    pub conditions_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            phone_fallback: default_phone_fallback(),
            conditions_fallback: default_conditions_fallback(),
            comment_fallback: default_comment_fallback(),
            conditions_separator: default_conditions_separator(),
        }
    }
}

impl DisplayConfig {
    pub fn fallbacks(&self) -> SummaryFallbacks {
        SummaryFallbacks {
            phone: self.phone_fallback.clone(),
            conditions: self.conditions_fallback.clone(),
            comment: self.comment_fallback.clone(),
            conditions_separator: self.conditions_separator.clone(),
        }
    }
}
