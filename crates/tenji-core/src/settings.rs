//! Conversion settings loaded from TOML.
//!
//! - `parse_settings_toml(toml_content)` parses a full or partial settings file
//! - missing keys fall back to `ConvertOptions::default()`
//! - default values are embedded via `include_str!("default_settings.toml")`

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub convert: ConvertOptions,
}

/// Behavior switches of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Leave alphabet mode for number mode when a digit follows a letter.
    pub alphabet_to_number: bool,
    /// Insert the number or foreign-letter indicator on Alphabet→Number and
    /// Number→Alphabet switches.
    pub indicator_on_reentry: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            alphabet_to_number: true,
            indicator_on_reentry: true,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}
