use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::types::Config;
use crate::date::{format_date, parse_iso, parse_with_format};
use crate::ui::picker::Bounds;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Sample date for the format round-trip check; day and month differ.
const ROUND_TRIP_SAMPLE: (i32, u32, u32) = (2024, 11, 23);

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/calrange/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("calrange").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `min` and `max` are `YYYY-MM-DD` dates with `min <= max`
    /// - `date_format` formats and parses back to the same day
    /// - `tick_rate_ms` is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds()?;

        let sample = NaiveDate::from_ymd_opt(ROUND_TRIP_SAMPLE.0, ROUND_TRIP_SAMPLE.1, ROUND_TRIP_SAMPLE.2)
            .ok_or_else(|| ConfigError::ValidationError {
                message: "round-trip sample date is invalid".to_string(),
            })?;
        let format = &self.ui.date_format;
        let round_trip = parse_with_format(&format_date(sample, format), format);
        if round_trip.ok() != Some(sample) {
            return Err(ConfigError::ValidationError {
                message: format!("date_format '{}' does not round-trip", format),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Selectable bounds from `[picker]`.
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        let min = parse_bound("min", self.picker.min.as_deref())?;
        let max = parse_bound("max", self.picker.max.as_deref())?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::ValidationError {
                    message: format!("picker.min {} is after picker.max {}", min, max),
                });
            }
        }
        Ok(Bounds::new(min, max))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}

fn parse_bound(key: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ConfigError> {
    value
        .map(|text| {
            parse_iso(text).map_err(|err| ConfigError::ValidationError {
                message: format!("picker.{}: {}", key, err),
            })
        })
        .transpose()
}
