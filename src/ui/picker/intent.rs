use chrono::NaiveDate;

use crate::ui::mvi::Intent;

use super::preset::QuickSelect;
use super::state::Side;

/// Transitions of [`RangePickerState`](super::RangePickerState).
///
/// Intents that depend on the current day carry it, so the reducer never
/// reads a clock.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerIntent {
    /// Two-phase click: first click starts a selection, second completes it.
    SelectDay { day: NaiveDate },
    /// Externally imposed selection; view follows the new range.
    SetDates { start: NaiveDate, end: NaiveDate },
    NavigateMonth { side: Side, delta: i32 },
    /// Year already validated as four digits.
    SetYear { side: Side, year: i32 },
    QuickSelect { preset: QuickSelect, today: NaiveDate },
    Reset { today: NaiveDate },
}

impl Intent for PickerIntent {}
