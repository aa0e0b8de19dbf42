use chrono::NaiveDate;

use crate::date::{add_months, first_of_month, next_month, previous_month, same_month};
use crate::ui::mvi::UiState;

/// Which of the two month grids an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Start/end pair chosen by the user.
///
/// When both ends are set, `start <= end`. `end == None` with a start set is
/// a selection waiting for its second click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pending(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Completed range; out-of-order ends are swapped.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn is_pending(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// The value reported to observers: a pending selection reads as a
    /// single-day range.
    pub fn reported(&self) -> Self {
        match (self.start, self.end) {
            (Some(start), None) => Self {
                start: Some(start),
                end: Some(start),
            },
            _ => *self,
        }
    }
}

/// The two months on screen, each stored as its first day.
///
/// `right > left` always holds after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewPair {
    pub left: NaiveDate,
    pub right: NaiveDate,
}

impl ViewPair {
    /// View for a selection: a range inside one month shows that month and
    /// the next; otherwise the start month on the left and the end month on
    /// the right.
    pub fn for_range(start: NaiveDate, end: NaiveDate) -> Self {
        let left = first_of_month(start);
        if same_month(start, end) {
            return Self {
                left,
                right: next_month(left),
            };
        }
        let right = first_of_month(end);
        if right <= left {
            return Self {
                left,
                right: next_month(left),
            };
        }
        Self { left, right }
    }

    /// Current month and the following one.
    pub fn around(today: NaiveDate) -> Self {
        let left = first_of_month(today);
        Self {
            left,
            right: next_month(left),
        }
    }

    pub fn month(&self, side: Side) -> NaiveDate {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Replace one side's month, then push the other side if the pair
    /// collided or inverted.
    pub fn with_month(self, side: Side, month: NaiveDate) -> Self {
        let month = first_of_month(month);
        match side {
            Side::Left => {
                let right = if month >= self.right {
                    next_month(month)
                } else {
                    self.right
                };
                Self { left: month, right }
            }
            Side::Right => {
                let left = if month <= self.left {
                    previous_month(month)
                } else {
                    self.left
                };
                Self { left, right: month }
            }
        }
    }

    pub fn shifted(self, side: Side, delta: i32) -> Self {
        let month = add_months(self.month(side), delta);
        self.with_month(side, month)
    }

    pub fn shows(&self, day: NaiveDate) -> bool {
        same_month(day, self.left) || same_month(day, self.right)
    }
}

/// Inclusive range of selectable days. Missing ends are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.min.map_or(true, |min| day >= min) && self.max.map_or(true, |max| day <= max)
    }

    /// Both ends, when both are known.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.min?, self.max?))
    }
}

/// Selection, displayed months and bounds of one picker instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangePickerState {
    pub selection: RangeSelection,
    pub view: ViewPair,
    pub bounds: Bounds,
}

impl UiState for RangePickerState {}

impl RangePickerState {
    pub fn new(initial_start: NaiveDate, initial_end: NaiveDate, bounds: Bounds) -> Self {
        let (start, end) = if initial_end < initial_start {
            (initial_end, initial_start)
        } else {
            (initial_start, initial_end)
        };
        Self {
            selection: RangeSelection::between(start, end),
            view: ViewPair::for_range(start, end),
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_month_range_shows_following_month() {
        let view = ViewPair::for_range(date(2024, 3, 2), date(2024, 3, 20));
        assert_eq!(view.left, date(2024, 3, 1));
        assert_eq!(view.right, date(2024, 4, 1));
    }

    #[test]
    fn cross_month_range_shows_both_months() {
        let view = ViewPair::for_range(date(2024, 1, 20), date(2024, 6, 3));
        assert_eq!(view.left, date(2024, 1, 1));
        assert_eq!(view.right, date(2024, 6, 1));
    }

    #[test]
    fn with_month_left_pushes_right_forward() {
        let view = ViewPair::around(date(2024, 3, 15));
        let moved = view.with_month(Side::Left, date(2024, 9, 1));
        assert_eq!(moved.left, date(2024, 9, 1));
        assert_eq!(moved.right, date(2024, 10, 1));
    }

    #[test]
    fn with_month_right_pushes_left_back() {
        let view = ViewPair::around(date(2024, 3, 15));
        let moved = view.with_month(Side::Right, date(2023, 12, 1));
        assert_eq!(moved.left, date(2023, 11, 1));
        assert_eq!(moved.right, date(2023, 12, 1));
    }

    #[test]
    fn reported_pending_selection_is_single_day() {
        let day = date(2024, 3, 15);
        let reported = RangeSelection::pending(day).reported();
        assert_eq!(reported.start, Some(day));
        assert_eq!(reported.end, Some(day));
        assert!(RangeSelection::empty().reported().is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds::new(Some(date(2024, 3, 5)), Some(date(2024, 3, 10)));
        assert!(!bounds.contains(date(2024, 3, 4)));
        assert!(bounds.contains(date(2024, 3, 5)));
        assert!(bounds.contains(date(2024, 3, 10)));
        assert!(!bounds.contains(date(2024, 3, 11)));
        assert!(Bounds::unbounded().contains(date(1, 1, 1)));
    }
}
