//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered on top of
//! each other; defaults are applied only when a value is read.

use crate::error::{Error, Result};
use crate::path::ResolveOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use detect::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("nocase: true\noutput_format: json\n").unwrap();
/// assert_eq!(config.nocase, Some(true));
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert!(config.resolve_options().nocase);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Fall back to case-insensitive matching when a path is not found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nocase: Option<bool>,

    /// Output format for resolved paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Resolution options described by this configuration.
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions::new().with_nocase(self.nocase.unwrap_or(false))
    }

    /// The configured output format, or [`OutputFormat::Text`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Fill every unset field with its default value.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.nocase.get_or_insert(false);
        self.output_format.get_or_insert(OutputFormat::Text);
        self
    }
}

/// Output format selection.
///
/// # Examples
///
/// ```
/// use detect::config::OutputFormat;
///
/// let format: OutputFormat = "JSON".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One resolved path per line.
    #[default]
    Text,
    /// JSON array of resolution records.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("Invalid output format: '{s}' (expected text or json)"),
            }),
        }
    }
}
