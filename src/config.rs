//! TOML-based scheduler configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::tariff::CYCLE_HOURS;

/// Top-level scheduler configuration parsed from TOML.
///
/// All fields have defaults matching the standard household dayparts. Load
/// from TOML with [`SchedulerConfig::from_toml_file`] or use
/// [`SchedulerConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Day and night boundaries.
    #[serde(default)]
    pub dayparts: DaypartConfig,
    /// Output document formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Hour boundaries of the day and night dayparts.
///
/// Starts are inclusive, ends exclusive. Night wraps past midnight and is
/// searched as `[night_start, 24)` and `[0, night_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DaypartConfig {
    pub day_start: usize,
    pub day_end: usize,
    pub night_start: usize,
    pub night_end: usize,
}

impl Default for DaypartConfig {
    fn default() -> Self {
        Self {
            day_start: 7,
            day_end: 21,
            night_start: 21,
            night_end: 7,
        }
    }
}

/// Output document formatting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"dayparts.day_start"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl SchedulerConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let d = &self.dayparts;

        for (field, hour) in [
            ("dayparts.day_start", d.day_start),
            ("dayparts.day_end", d.day_end),
            ("dayparts.night_start", d.night_start),
            ("dayparts.night_end", d.night_end),
        ] {
            if hour > CYCLE_HOURS {
                errors.push(ConfigError {
                    field: field.into(),
                    message: format!("must be <= {CYCLE_HOURS}, got {hour}"),
                });
            }
        }

        if d.day_start >= d.day_end {
            errors.push(ConfigError {
                field: "dayparts.day_start".into(),
                message: "must be < dayparts.day_end".into(),
            });
        }
        if d.night_end > d.night_start {
            errors.push(ConfigError {
                field: "dayparts.night_end".into(),
                message: "must be <= dayparts.night_start".into(),
            });
        }

        errors
    }
}
