//! Environment variable handling for configuration overrides.
//!
//! `DETECT_*` variables override values from configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Enables case-insensitive fallback when set to a true value.
pub const NOCASE_ENV: &str = "DETECT_NOCASE";

/// Selects the output format (`text` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "DETECT_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use detect::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid boolean or an unknown
    /// output format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(val) = Self::var(NOCASE_ENV) {
            config.nocase = Some(Self::parse_bool(NOCASE_ENV, &val)?);
        }

        if let Some(val) = Self::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(val.parse().map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{val}' (expected text or json)"),
            })?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|val| !val.trim().is_empty())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
