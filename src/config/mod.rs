//! Configuration for the optica form.
//!
//! Configuration lives in the YAML frontmatter of `.optica/config.md`. Every
//! section is optional; a missing default file means built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub mod defaults;
pub mod validation;

pub use defaults::*;
pub use validation::*;

/// Default config file location, relative to the working directory.
pub const CONFIG_PATH: &str = ".optica/config.md";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "OPTICA_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Choices offered for the appointment type
    #[serde(default = "default_appointment_types")]
    pub appointment_types: Vec<String>,
    /// Choices offered for the conditions multi-select
    #[serde(default = "default_conditions")]
    pub conditions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            display: DisplayConfig::default(),
            appointment_types: default_appointment_types(),
            conditions: default_conditions(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Resolution order:
    /// 1. `explicit` path (from `--config`), which must exist
    /// 2. `$OPTICA_CONFIG`, which must exist
    /// 3. `.optica/config.md`, falling back to defaults when absent
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(path) = env_config_path() {
            return Self::load_from(&path);
        }

        let default_path = Path::new(CONFIG_PATH);
        if default_path.exists() {
            Self::load_from(default_path)
        } else {
            warn!(path = CONFIG_PATH, "no config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        // An empty frontmatter block deserializes to YAML null
        let config: Config = if frontmatter.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.form.validate()?;
        self.display.validate()?;
        validate_choices("appointment_types", &self.appointment_types)?;
        validate_choices("conditions", &self.conditions)?;
        Ok(())
    }
}

/// Config path from the environment, if set and non-empty.
pub fn env_config_path() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Split a markdown document into its `---` delimited frontmatter and body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    match rest.find("\n---") {
        Some(end) => {
            let frontmatter = rest[..end].to_string();
            let body = rest[end + 4..].trim_start();
            (Some(frontmatter), body)
        }
        None => (None, content),
    }
}
