use serde::{Deserialize, Serialize};

use crate::date::DEFAULT_DATE_FORMAT;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Picker dates, all `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Earliest selectable day; also the reset start.
    pub min: Option<String>,
    /// Latest selectable day; also the reset end.
    pub max: Option<String>,
    pub initial_start: Option<String>,
    pub initial_end: Option<String>,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// chrono format used for the range field (default: `%m/%d/%Y`).
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}
