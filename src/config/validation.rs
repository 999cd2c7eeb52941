//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::{DisplayConfig, FormConfig};

impl FormConfig {
    /// Validate form rule configuration
    pub fn validate(&self) -> Result<()> {
        if self.name_min_length == 0 {
            anyhow::bail!("form.name_min_length must be greater than 0");
        }

        Ok(())
    }
}

impl DisplayConfig {
    /// Validate display configuration
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("display.phone_fallback", &self.phone_fallback),
            ("display.conditions_fallback", &self.conditions_fallback),
            ("display.comment_fallback", &self.comment_fallback),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("{} must not be empty", key);
            }
        }

        Ok(())
    }
}

/// Check that a list of choices has no blanks or duplicates.
pub fn validate_choices(key: &str, choices: &[String]) -> Result<()> {
    if choices.is_empty() {
        anyhow::bail!("{} must list at least one choice", key);
    }

    for (idx, choice) in choices.iter().enumerate() {
        if choice.trim().is_empty() {
            anyhow::bail!("{}[{}] must not be empty", key, idx);
        }
        if choices[..idx].contains(choice) {
            anyhow::bail!("{} lists '{}' more than once", key, choice);
        }
    }

    Ok(())
}
