//! Calendar-day helpers built on `chrono::NaiveDate`.
//!
//! Every date in the picker is a `NaiveDate`: a calendar day with no time
//! component, so equality and ordering are by day. Month values are
//! represented by the first day of that month.

use chrono::{Datelike, Local, Months, NaiveDate};
use thiserror::Error;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday labels, week starting on Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Display format used by the range field (`mm/dd/yyyy`).
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Separator between the two dates in a range field.
pub const RANGE_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("Invalid date '{input}': expected {expected}")]
    Invalid {
        input: String,
        expected: &'static str,
    },
}

/// Source of "today" for quick-select presets and reset.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar day from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift a date by whole months, clamping the day to the target month.
///
/// Returns the input unchanged when the result would leave chrono's range.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let shifted = if delta >= 0 {
        date.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

pub fn next_month(month: NaiveDate) -> NaiveDate {
    add_months(first_of_month(month), 1)
}

pub fn previous_month(month: NaiveDate) -> NaiveDate {
    add_months(first_of_month(month), -1)
}

pub fn days_in_month(month: NaiveDate) -> u32 {
    let first = first_of_month(month);
    let next = next_month(first);
    if next == first {
        // End of chrono's range: count forward until the month changes.
        return first
            .iter_days()
            .take_while(|day| day.month() == first.month())
            .count() as u32;
    }
    (next - first).num_days() as u32
}

pub fn last_of_month(month: NaiveDate) -> NaiveDate {
    let first = first_of_month(month);
    first.with_day(days_in_month(first)).unwrap_or(first)
}

/// Weekday of the first day of the month, 0 = Sunday.
pub fn first_weekday(month: NaiveDate) -> usize {
    first_of_month(month).weekday().num_days_from_sunday() as usize
}

/// First day of `month`, moved to `year`.
pub fn with_year(month: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month.month(), 1).unwrap_or_else(|| first_of_month(month))
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Signed number of months from the month of `from` to the month of `to`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

pub fn month_name(month: NaiveDate) -> &'static str {
    MONTH_NAMES[month.month0() as usize]
}

/// Parse `YYYY-MM-DD`.
pub fn parse_iso(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| DateParseError::Invalid {
        input: input.to_string(),
        expected: "YYYY-MM-DD",
    })
}

/// Parse a date with the given `strftime` format.
pub fn parse_with_format(input: &str, format: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), format).map_err(|_| DateParseError::Invalid {
        input: input.to_string(),
        expected: "a date matching the configured format",
    })
}

/// Parse either `YYYY-MM-DD` or `mm/dd/yyyy`.
pub fn parse_flexible(input: &str) -> Result<NaiveDate, DateParseError> {
    parse_iso(input)
        .or_else(|_| parse_with_format(input, DEFAULT_DATE_FORMAT))
        .map_err(|_| DateParseError::Invalid {
            input: input.to_string(),
            expected: "YYYY-MM-DD or mm/dd/yyyy",
        })
}

/// Parse optional date text, falling back to `today` when it is missing or
/// malformed. Malformed input is logged, never reported to the caller.
pub fn parse_or_today(input: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(text) = input.filter(|text| !text.trim().is_empty()) else {
        return today;
    };
    match parse_flexible(text) {
        Ok(date) => date,
        Err(err) => {
            tracing::warn!(%err, "falling back to today");
            today
        }
    }
}

pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Format a range as `start - end` using `format` for each side.
pub fn format_range(start: NaiveDate, end: NaiveDate, format: &str) -> String {
    format!(
        "{}{}{}",
        format_date(start, format),
        RANGE_SEPARATOR,
        format_date(end, format)
    )
}

/// Parse range field text of the form `start - end`.
///
/// A missing end means a single-day range. Pieces that fail to parse fall
/// back to `today`.
pub fn parse_range_text(text: &str, format: &str, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let mut parts = text.split(RANGE_SEPARATOR).map(str::trim);
    let start_text = parts.next().filter(|part| !part.is_empty());
    let end_text = parts.next().filter(|part| !part.is_empty());

    let parse = |piece: &str| match parse_with_format(piece, format) {
        Ok(date) => date,
        Err(err) => {
            tracing::warn!(%err, "range field piece unreadable, using today");
            today
        }
    };

    let start = start_text.map(&parse).unwrap_or(today);
    let end = end_text.map(&parse).unwrap_or(start);
    (start, end)
}
