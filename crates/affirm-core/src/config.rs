//! Configuration loader for affirm.

use crate::culture::Culture;
use crate::format::FormatOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// File looked up by [`load_config`].
pub const CONFIG_FILE: &str = "affirm.config.yaml";

/// Errors that can occur during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("separator '{0}' is a digit")]
    DigitSeparator(char),
    #[error("decimal and group separator are both '{0}'")]
    SameSeparators(char),
    #[error("max-lines must be at least 1")]
    ZeroMaxLines,
}

/// Settings shared by every assertion built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssertConfig {
    /// Number formatting in messages (default: invariant).
    #[serde(default)]
    pub culture: Culture,

    /// Lines of a multi-line value printed in a message (default: 100).
    #[serde(rename = "max-lines", default = "default_max_lines")]
    pub max_lines: usize,
}

const fn default_max_lines() -> usize {
    100
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            culture: Culture::invariant(),
            max_lines: default_max_lines(),
        }
    }
}

impl AssertConfig {
    #[must_use]
    pub const fn format_options(&self) -> FormatOptions<'_> {
        FormatOptions {
            culture: &self.culture,
            max_lines: self.max_lines,
        }
    }
}

/// Load assertion configuration from `affirm.config.yaml` in `dir`.
///
/// If the file doesn't exist, returns default configuration.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The YAML is invalid
/// - The culture or line limit is unusable
pub fn load_config(dir: &Path) -> Result<AssertConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);

    let config = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        debug!(path = %config_path.display(), "loaded assertion config");
        serde_yml::from_str(&content)?
    } else {
        debug!(path = %config_path.display(), "no assertion config, using defaults");
        AssertConfig::default()
    };

    validate_config(&config)?;
    Ok(config)
}

/// Validate the configuration.
///
/// # Errors
/// Returns the first problem found with the culture or line limit.
pub const fn validate_config(config: &AssertConfig) -> Result<(), ConfigError> {
    let decimal = config.culture.decimal_separator;
    if decimal.is_ascii_digit() {
        return Err(ConfigError::DigitSeparator(decimal));
    }
    if let Some(group) = config.culture.group_separator {
        if group.is_ascii_digit() {
            return Err(ConfigError::DigitSeparator(group));
        }
        if group == decimal {
            return Err(ConfigError::SameSeparators(group));
        }
    }
    if config.max_lines == 0 {
        return Err(ConfigError::ZeroMaxLines);
    }
    Ok(())
}

/// Per-call override options for configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub culture: Option<Culture>,
    pub max_lines: Option<usize>,
}

/// Apply overrides to a configuration.
#[must_use]
pub fn apply_overrides(mut config: AssertConfig, overrides: &ConfigOverrides) -> AssertConfig {
    if let Some(ref culture) = overrides.culture {
        config.culture.clone_from(culture);
    }
    if let Some(max_lines) = overrides.max_lines {
        config.max_lines = max_lines;
    }
    config
}
