// src/config/settings.rs
// Settings struct, its defaults, and loading it from disk.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::convert::DEFAULT_PLACEHOLDER;
use crate::error::ConfigError;

/// Seconds before a title fetch gives up
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings handed explicitly to every handler
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Convert URLs automatically when text is pasted
    pub enable_auto_convert: bool,

    /// Link label used when a page title cannot be fetched
    pub placeholder_text: String,

    /// Per-request deadline for title fetches
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_auto_convert: true,
            placeholder_text: DEFAULT_PLACEHOLDER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// The placeholder label, falling back to "Untitled" when left blank
    pub fn placeholder(&self) -> &str {
        if self.placeholder_text.trim().is_empty() {
            DEFAULT_PLACEHOLDER
        } else {
            &self.placeholder_text
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout-secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// Reads, parses and validates a settings file
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}
