//! Reducer for the range-picker state machine.

use crate::date::with_year;
use crate::ui::mvi::Reducer;

use super::intent::PickerIntent;
use super::state::{RangePickerState, RangeSelection, ViewPair};

/// Pure transitions of [`RangePickerState`].
///
/// Observer notifications are the caller's job; see
/// [`DateRangePicker`](crate::ui::date_picker::DateRangePicker).
pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = RangePickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::SelectDay { day } => {
                if !state.bounds.contains(day) {
                    return state;
                }
                let selection = match (state.selection.start, state.selection.end) {
                    (Some(start), None) => RangeSelection::between(start, day),
                    _ => RangeSelection::pending(day),
                };
                RangePickerState { selection, ..state }
            }

            PickerIntent::SetDates { start, end } => {
                let selection = RangeSelection::between(start, end);
                let view = ViewPair::for_range(
                    selection.start.unwrap_or(start),
                    selection.end.unwrap_or(end),
                );
                RangePickerState {
                    selection,
                    view,
                    ..state
                }
            }

            PickerIntent::NavigateMonth { side, delta } => RangePickerState {
                view: state.view.shifted(side, delta),
                ..state
            },

            PickerIntent::SetYear { side, year } => {
                let month = with_year(state.view.month(side), year);
                RangePickerState {
                    view: state.view.with_month(side, month),
                    ..state
                }
            }

            PickerIntent::QuickSelect { preset, today } => {
                let (start, end) = preset.range(today);
                Self::reduce(state, PickerIntent::SetDates { start, end })
            }

            PickerIntent::Reset { today } => RangePickerState {
                selection: RangeSelection::empty(),
                view: ViewPair::around(today),
                ..state
            },
        }
    }
}
