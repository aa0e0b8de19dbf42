//! Command-line surface of the `calrange` binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::date::{parse_flexible, parse_or_today, parse_range_text, DateParseError};
use crate::ui::app::AppSettings;
use crate::ui::picker::{Bounds, QuickSelect, RangeSelection};

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "calrange",
    version,
    about = "Pick a date range in the terminal with two side-by-side calendars"
)]
pub struct Cli {
    #[arg(long, help = "Initial range start (YYYY-MM-DD or mm/dd/yyyy)")]
    pub start: Option<String>,
    #[arg(long, help = "Initial range end (YYYY-MM-DD or mm/dd/yyyy)")]
    pub end: Option<String>,
    #[arg(
        long,
        conflicts_with_all = ["start", "end"],
        help = "Initial range as field text, e.g. \"03/01/2024 - 03/09/2024\""
    )]
    pub range: Option<String>,
    #[arg(
        long,
        conflicts_with_all = ["start", "end", "range"],
        value_parser = parse_preset,
        help = "Start from a preset: today, last7days, last15days, thismonth, last3months, thisyear"
    )]
    pub preset: Option<QuickSelect>,
    #[arg(long, help = "Earliest selectable day; also the reset start")]
    pub min: Option<String>,
    #[arg(long, help = "Latest selectable day; also the reset end")]
    pub max: Option<String>,
    #[arg(long, help = "Config file (default: <config dir>/calrange/config.toml)")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("--{flag}: {source}")]
    InvalidBound {
        flag: &'static str,
        #[source]
        source: DateParseError,
    },

    #[error("--min {min} is after --max {max}")]
    EmptyBounds { min: NaiveDate, max: NaiveDate },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn parse_preset(value: &str) -> Result<QuickSelect, String> {
    QuickSelect::from_id(value).ok_or_else(|| format!("unknown preset '{}'", value))
}

impl Cli {
    /// Merge flags over `config`. Flags win; malformed bounds are errors,
    /// malformed initial dates fall back to `today`.
    pub fn resolve(&self, config: &Config, today: NaiveDate) -> Result<AppSettings, ArgsError> {
        let configured = config.bounds()?;
        let min = parse_bound("min", self.min.as_deref())?.or(configured.min);
        let max = parse_bound("max", self.max.as_deref())?.or(configured.max);
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ArgsError::EmptyBounds { min, max });
            }
        }

        let date_format = config.ui.date_format.clone();
        let initial = if let Some(preset) = self.preset {
            let (start, end) = preset.range(today);
            RangeSelection::between(start, end)
        } else if let Some(text) = self.range.as_deref() {
            let (start, end) = parse_range_text(text, &date_format, today);
            RangeSelection::between(start, end)
        } else {
            let start = self.start.as_deref().or(config.picker.initial_start.as_deref());
            let end = self.end.as_deref().or(config.picker.initial_end.as_deref());
            if start.is_none() && end.is_none() {
                RangeSelection::empty()
            } else {
                RangeSelection::between(parse_or_today(start, today), parse_or_today(end, today))
            }
        };

        Ok(AppSettings {
            initial,
            defaults: Bounds::new(min, max),
            date_format,
        })
    }
}

fn parse_bound(flag: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, ArgsError> {
    value
        .map(|text| parse_flexible(text).map_err(|source| ArgsError::InvalidBound { flag, source }))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("calrange").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_leave_field_empty() {
        let settings = parse(&[]).resolve(&Config::default(), date(2024, 3, 15)).unwrap();
        assert!(settings.initial.is_empty());
        assert_eq!(settings.defaults, Bounds::unbounded());
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.picker.min = Some("2024-01-01".to_string());
        config.picker.initial_start = Some("2024-02-01".to_string());
        let cli = parse(&["--min", "2024-02-01", "--start", "2024-03-01", "--end", "2024-03-05"]);
        let settings = cli.resolve(&config, date(2024, 3, 15)).unwrap();
        assert_eq!(settings.defaults.min, Some(date(2024, 2, 1)));
        assert_eq!(
            settings.initial,
            RangeSelection::between(date(2024, 3, 1), date(2024, 3, 5))
        );
    }

    #[test]
    fn unreadable_start_falls_back_to_today() {
        let cli = parse(&["--start", "soon"]);
        let settings = cli.resolve(&Config::default(), date(2024, 3, 15)).unwrap();
        assert_eq!(settings.initial, RangeSelection::between(date(2024, 3, 15), date(2024, 3, 15)));
    }

    #[test]
    fn unreadable_bound_is_an_error() {
        let cli = parse(&["--max", "later"]);
        assert!(matches!(
            cli.resolve(&Config::default(), date(2024, 3, 15)),
            Err(ArgsError::InvalidBound { flag: "max", .. })
        ));
    }

    #[test]
    fn preset_flag_uses_today() {
        let cli = parse(&["--preset", "last7days"]);
        let settings = cli.resolve(&Config::default(), date(2024, 3, 15)).unwrap();
        assert_eq!(settings.initial, RangeSelection::between(date(2024, 3, 9), date(2024, 3, 15)));
    }

    #[test]
    fn unknown_preset_is_rejected_by_clap() {
        assert!(Cli::try_parse_from(["calrange", "--preset", "fortnight"]).is_err());
    }

    #[test]
    fn range_flag_parses_field_text() {
        let cli = parse(&["--range", "03/09/2024 - 03/01/2024"]);
        let settings = cli.resolve(&Config::default(), date(2024, 3, 15)).unwrap();
        assert_eq!(settings.initial, RangeSelection::between(date(2024, 3, 1), date(2024, 3, 9)));
    }
}
