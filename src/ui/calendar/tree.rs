//! Pure construction of the picker's visual tree from state.

use chrono::{Datelike, NaiveDate};

use crate::date::{days_in_month, first_weekday, month_name, WEEKDAY_LABELS};
use crate::ui::picker::{Bounds, QuickSelect, RangePickerState, RangeSelection, Side};
use crate::ui::year_input::YearInput;

/// Gesture attached to an interactive node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    SelectDay(NaiveDate),
    PrevMonth(Side),
    NextMonth(Side),
    EditYear(Side),
    QuickSelect(QuickSelect),
    Reset,
}

/// Visual class of a day cell, evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    Disabled,
    RangeStart,
    RangeEnd,
    InRange,
    Selected,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    Empty,
    Day {
        date: NaiveDate,
        class: DayClass,
        /// `None` for disabled days.
        action: Option<PickerAction>,
    },
}

impl DayCell {
    pub fn action(&self) -> Option<PickerAction> {
        match self {
            DayCell::Day { action, .. } => *action,
            DayCell::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearLabel {
    Text(String),
    Editing { text: String, cursor: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthHeader {
    pub prev: PickerAction,
    pub month_name: &'static str,
    pub year: YearLabel,
    pub year_action: PickerAction,
    pub next: PickerAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub side: Side,
    pub month: NaiveDate,
    pub header: MonthHeader,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: PickerAction,
}

/// Quick-select column plus the two month grids, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTree {
    pub quick_select: Vec<Button>,
    pub reset: Button,
    pub months: [MonthGrid; 2],
}

pub fn build_tree(state: &RangePickerState, year_edit: Option<&YearInput>) -> CalendarTree {
    let quick_select = QuickSelect::ALL
        .into_iter()
        .map(|preset| Button {
            label: preset.label(),
            action: PickerAction::QuickSelect(preset),
        })
        .collect();

    let editing = |side: Side| year_edit.filter(|input| input.side() == side);

    CalendarTree {
        quick_select,
        reset: Button {
            label: "Reset",
            action: PickerAction::Reset,
        },
        months: [
            month_grid(state, Side::Left, editing(Side::Left)),
            month_grid(state, Side::Right, editing(Side::Right)),
        ],
    }
}

pub fn month_grid(
    state: &RangePickerState,
    side: Side,
    year_edit: Option<&YearInput>,
) -> MonthGrid {
    let month = state.view.month(side);
    let year = match year_edit {
        Some(input) => YearLabel::Editing {
            text: input.text().to_string(),
            cursor: input.cursor(),
        },
        None => YearLabel::Text(month.year().to_string()),
    };

    MonthGrid {
        side,
        month,
        header: MonthHeader {
            prev: PickerAction::PrevMonth(side),
            month_name: month_name(month),
            year,
            year_action: PickerAction::EditYear(side),
            next: PickerAction::NextMonth(side),
        },
        weekdays: WEEKDAY_LABELS,
        cells: day_cells(month, &state.selection, &state.bounds),
    }
}

/// Leading blanks up to the first weekday, then one cell per day.
pub fn day_cells(month: NaiveDate, selection: &RangeSelection, bounds: &Bounds) -> Vec<DayCell> {
    let leading = first_weekday(month);
    let mut cells = Vec::with_capacity(leading + 31);
    cells.extend(std::iter::repeat(DayCell::Empty).take(leading));

    for day in 1..=days_in_month(month) {
        let Some(date) = month.with_day(day) else {
            continue;
        };
        let class = classify_day(date, selection, bounds);
        let action = (class != DayClass::Disabled).then_some(PickerAction::SelectDay(date));
        cells.push(DayCell::Day {
            date,
            class,
            action,
        });
    }
    cells
}

pub fn classify_day(date: NaiveDate, selection: &RangeSelection, bounds: &Bounds) -> DayClass {
    if !bounds.contains(date) {
        return DayClass::Disabled;
    }
    match (selection.start, selection.end) {
        (Some(start), Some(end)) => {
            if date == start {
                DayClass::RangeStart
            } else if date == end {
                DayClass::RangeEnd
            } else if date > start && date < end {
                DayClass::InRange
            } else {
                DayClass::Plain
            }
        }
        (Some(start), None) if date == start => DayClass::Selected,
        _ => DayClass::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn thirty_day_month_starting_wednesday_has_33_cells() {
        // April 2026 starts on a Wednesday.
        let cells = day_cells(date(2026, 4, 1), &RangeSelection::empty(), &Bounds::unbounded());
        assert_eq!(cells.len(), 33);
        assert!(cells[..3].iter().all(|cell| *cell == DayCell::Empty));
        assert!(matches!(cells[3], DayCell::Day { date: d, .. } if d == date(2026, 4, 1)));
    }

    #[test]
    fn classify_orders_disabled_first() {
        let selection = RangeSelection::between(date(2024, 3, 1), date(2024, 3, 10));
        let bounds = Bounds::new(Some(date(2024, 3, 5)), None);
        assert_eq!(classify_day(date(2024, 3, 1), &selection, &bounds), DayClass::Disabled);
        assert_eq!(classify_day(date(2024, 3, 5), &selection, &bounds), DayClass::InRange);
        assert_eq!(classify_day(date(2024, 3, 10), &selection, &bounds), DayClass::RangeEnd);
    }

    #[test]
    fn single_day_range_marks_start() {
        let day = date(2024, 3, 15);
        let selection = RangeSelection::between(day, day);
        assert_eq!(classify_day(day, &selection, &Bounds::unbounded()), DayClass::RangeStart);
    }

    #[test]
    fn editing_label_only_on_its_side() {
        let state = RangePickerState::new(date(2024, 3, 1), date(2024, 3, 2), Bounds::unbounded());
        let input = YearInput::new(Side::Right, 2024);
        let tree = build_tree(&state, Some(&input));
        assert_eq!(tree.months[0].header.year, YearLabel::Text("2024".to_string()));
        assert!(matches!(tree.months[1].header.year, YearLabel::Editing { .. }));
    }
}
