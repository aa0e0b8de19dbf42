//! The date-range picker widget: state machine, popup, year editor and
//! observer wired together.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::date::{first_of_month, last_of_month, months_between, Clock};
use crate::ui::calendar::{build_tree, render_calendar, CalendarTree, HitMap, PickerAction};
use crate::ui::mvi::Reducer;
use crate::ui::picker::{
    Bounds, PickerIntent, PickerObserver, PickerReducer, QuickSelect, RangePickerState,
    RangeSelection, Side, ViewPair,
};
use crate::ui::popup::{CaptureFactory, PopupState};
use crate::ui::year_input::{parse_year, YearInput, YearKeyOutcome};

/// Construction parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerOptions {
    /// Region the popup is centered in; the whole frame when `None`.
    pub mount: Option<Rect>,
    pub initial_start: Option<NaiveDate>,
    pub initial_end: Option<NaiveDate>,
    /// Inclusive lower bound of selectable days.
    pub default_start: Option<NaiveDate>,
    /// Inclusive upper bound of selectable days.
    pub default_end: Option<NaiveDate>,
}

pub struct DateRangePicker {
    state: RangePickerState,
    popup: PopupState,
    year_edit: Option<YearInput>,
    cursor: NaiveDate,
    hits: HitMap,
    mount: Option<Rect>,
    clock: Arc<dyn Clock>,
    observer: Box<dyn PickerObserver>,
}

impl DateRangePicker {
    /// Missing initial dates default to today.
    pub fn new(
        options: PickerOptions,
        clock: Arc<dyn Clock>,
        observer: Box<dyn PickerObserver>,
    ) -> Self {
        let today = clock.today();
        let start = options.initial_start.unwrap_or(today);
        let end = options.initial_end.unwrap_or(today);
        let bounds = Bounds::new(options.default_start, options.default_end);
        let state = RangePickerState::new(start, end, bounds);
        tracing::debug!(%start, %end, ?bounds, "date range picker created");

        Self {
            cursor: state.selection.start.unwrap_or(state.view.left),
            state,
            popup: PopupState::default(),
            year_edit: None,
            hits: HitMap::default(),
            mount: options.mount,
            clock,
            observer,
        }
    }

    /// Acquire pointer capture through `capture` while the popup is open.
    pub fn with_pointer_capture(mut self, capture: CaptureFactory) -> Self {
        self.popup = PopupState::new(capture);
        self
    }

    pub fn state(&self) -> &RangePickerState {
        &self.state
    }

    pub fn selection(&self) -> RangeSelection {
        self.state.selection
    }

    pub fn view(&self) -> ViewPair {
        self.state.view
    }

    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    pub fn year_edit(&self) -> Option<&YearInput> {
        self.year_edit.as_ref()
    }

    /// Keyboard cursor day.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Regions of the last rendered frame.
    pub fn hit_map(&self) -> &HitMap {
        &self.hits
    }

    pub fn set_mount(&mut self, mount: Option<Rect>) {
        self.mount = mount;
    }

    /// Visual tree for the current state.
    pub fn tree(&self) -> CalendarTree {
        build_tree(&self.state, self.year_edit.as_ref())
    }

    pub fn open(&mut self) {
        if self.popup.open() {
            tracing::debug!("picker opened");
        }
    }

    /// Hide the popup. A pending year edit is blurred first.
    pub fn close(&mut self) {
        self.blur_year_edit();
        if self.popup.close() {
            tracing::debug!("picker closed");
        }
        self.hits = HitMap::default();
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn dispatch(&mut self, intent: PickerIntent) {
        tracing::trace!(?intent, "picker dispatch");
        self.state = PickerReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Two-phase click. Days outside the bounds are ignored and do not
    /// notify. Returns whether the selection changed.
    pub fn select_day(&mut self, day: NaiveDate) -> bool {
        if !self.state.bounds.contains(day) {
            tracing::debug!(%day, "ignoring click on disabled day");
            return false;
        }
        self.dispatch(PickerIntent::SelectDay { day });
        self.cursor = day;
        self.observer.on_change(self.state.selection.reported());
        true
    }

    /// Impose a selection from outside. Does not notify.
    pub fn set_dates(&mut self, start: NaiveDate, end: NaiveDate) {
        self.dispatch(PickerIntent::SetDates { start, end });
        self.cursor = self.state.selection.start.unwrap_or(start);
    }

    pub fn navigate_month(&mut self, side: Side, delta: i32) {
        self.dispatch(PickerIntent::NavigateMonth { side, delta });
        self.keep_cursor_on_screen();
    }

    /// Apply year text to one side. Anything but four digits is rejected
    /// without touching state.
    pub fn set_year(&mut self, side: Side, text: &str) -> bool {
        let Some(year) = parse_year(text) else {
            tracing::debug!(text, "rejected year input");
            return false;
        };
        self.dispatch(PickerIntent::SetYear { side, year });
        self.keep_cursor_on_screen();
        true
    }

    /// Apply a preset and notify.
    pub fn apply_quick_select(&mut self, preset: QuickSelect) {
        let today = self.clock.today();
        self.dispatch(PickerIntent::QuickSelect { preset, today });
        self.cursor = self.state.selection.start.unwrap_or(today);
        tracing::debug!(preset = preset.id(), "quick select applied");
        self.observer.on_change(self.state.selection);
    }

    /// Clear the selection and notify `on_reset` once.
    pub fn reset(&mut self) {
        self.year_edit = None;
        let today = self.clock.today();
        self.dispatch(PickerIntent::Reset { today });
        self.cursor = today;
        tracing::debug!("selection reset");
        self.observer.on_reset();
    }

    // ------------------------------------------------------------------
    // Year editor
    // ------------------------------------------------------------------

    pub fn begin_year_edit(&mut self, side: Side) {
        if self.year_edit.as_ref().is_some_and(|input| input.side() == side) {
            return;
        }
        self.blur_year_edit();
        let year = self.state.view.month(side).year();
        self.year_edit = Some(YearInput::new(side, year));
    }

    /// Close the year editor: commit four digits, otherwise revert.
    fn blur_year_edit(&mut self) {
        let Some(input) = self.year_edit.take() else {
            return;
        };
        match input.committed_year() {
            Some(year) => {
                self.dispatch(PickerIntent::SetYear {
                    side: input.side(),
                    year,
                });
                self.keep_cursor_on_screen();
            }
            None => tracing::debug!(text = input.text(), "year edit reverted"),
        }
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    pub fn activate(&mut self, action: PickerAction) {
        match action {
            PickerAction::SelectDay(day) => {
                self.select_day(day);
            }
            PickerAction::PrevMonth(side) => self.navigate_month(side, -1),
            PickerAction::NextMonth(side) => self.navigate_month(side, 1),
            PickerAction::EditYear(side) => self.begin_year_edit(side),
            PickerAction::QuickSelect(preset) => self.apply_quick_select(preset),
            PickerAction::Reset => self.reset(),
        }
    }

    /// Returns true when the event was consumed. A press outside the popup
    /// closes it and is left for the host.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if !self.is_open() || !matches!(event.kind, MouseEventKind::Down(_)) {
            return false;
        }
        if !self.hits.contains(event.column, event.row) {
            self.close();
            return false;
        }

        // Resolve against what was on screen before a blur re-derives the view.
        let action = self.hits.hit(event.column, event.row);
        let on_active_year = match (action, &self.year_edit) {
            (Some(PickerAction::EditYear(side)), Some(input)) => input.side() == side,
            _ => false,
        };
        if !on_active_year {
            self.blur_year_edit();
        }
        if let Some(action) = action {
            self.activate(action);
        }
        true
    }

    /// Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_open() || key.kind != KeyEventKind::Press {
            return false;
        }

        if let Some(input) = self.year_edit.as_mut() {
            match input.handle_key(key) {
                YearKeyOutcome::Edited | YearKeyOutcome::Suppressed => {}
                YearKeyOutcome::Submit | YearKeyOutcome::Blur => self.blur_year_edit(),
            }
            return true;
        }

        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_day(self.cursor);
            }
            KeyCode::Char('[') => self.navigate_month(Side::Left, -1),
            KeyCode::Char(']') => self.navigate_month(Side::Left, 1),
            KeyCode::Char('{') => self.navigate_month(Side::Right, -1),
            KeyCode::Char('}') => self.navigate_month(Side::Right, 1),
            KeyCode::Char('y') => self.begin_year_edit(Side::Left),
            KeyCode::Char('Y') => self.begin_year_edit(Side::Right),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(ch @ '1'..='6') => {
                let index = ch as usize - '1' as usize;
                self.apply_quick_select(QuickSelect::ALL[index]);
            }
            _ => return false,
        }
        true
    }

    fn move_cursor(&mut self, days: i64) {
        let Some(next) = self.cursor.checked_add_signed(Duration::days(days)) else {
            return;
        };
        self.cursor = next;
        self.reveal_cursor();
    }

    /// A cursor scrolled out of view jumps to the first day of the left month.
    fn keep_cursor_on_screen(&mut self) {
        let view = self.state.view;
        if !view.shows(self.cursor) {
            self.cursor = view.left;
        }
    }

    /// Scroll the views until the cursor's month is on screen.
    fn reveal_cursor(&mut self) {
        let view = self.state.view;
        if view.shows(self.cursor) {
            return;
        }
        let month = first_of_month(self.cursor);
        if month < view.left {
            let delta = months_between(view.left, month);
            self.navigate_month(Side::Left, delta);
            self.navigate_month(Side::Right, delta);
        } else if self.cursor > last_of_month(view.right) {
            let delta = months_between(view.right, month);
            self.navigate_month(Side::Right, delta);
            self.navigate_month(Side::Left, delta);
        } else {
            self.navigate_month(Side::Left, months_between(view.left, month));
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Draw the popup when open and remember where its controls landed.
    pub fn render(&mut self, frame: &mut Frame) {
        if !self.is_open() {
            self.hits = HitMap::default();
            return;
        }
        let mount = self.mount.unwrap_or_else(|| frame.area());
        let tree = self.tree();
        self.hits = render_calendar(frame, mount, &tree, Some(self.cursor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;
    use crate::ui::picker::NoopObserver;
    use crossterm::event::KeyModifiers;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker(start: NaiveDate, end: NaiveDate) -> DateRangePicker {
        let options = PickerOptions {
            initial_start: Some(start),
            initial_end: Some(end),
            ..PickerOptions::default()
        };
        let mut picker = DateRangePicker::new(
            options,
            Arc::new(FixedClock(date(2024, 3, 15))),
            Box::new(NoopObserver),
        );
        picker.open();
        picker
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn missing_initial_dates_default_to_today() {
        let picker = DateRangePicker::new(
            PickerOptions::default(),
            Arc::new(FixedClock(date(2024, 3, 15))),
            Box::new(NoopObserver),
        );
        assert_eq!(
            picker.selection(),
            RangeSelection::between(date(2024, 3, 15), date(2024, 3, 15))
        );
        assert_eq!(picker.view().left, date(2024, 3, 1));
        assert_eq!(picker.view().right, date(2024, 4, 1));
    }

    #[test]
    fn cursor_moving_past_right_month_scrolls_both_views() {
        let mut picker = picker(date(2024, 4, 28), date(2024, 4, 28));
        assert_eq!(picker.view().right, date(2024, 5, 1));
        for _ in 0..5 {
            picker.handle_key(press(KeyCode::Down));
        }
        // 2024-04-28 + 35 days = 2024-06-02
        assert_eq!(picker.cursor(), date(2024, 6, 2));
        assert_eq!(picker.view().left, date(2024, 5, 1));
        assert_eq!(picker.view().right, date(2024, 6, 1));
    }

    #[test]
    fn cursor_moving_before_left_month_scrolls_back() {
        let mut picker = picker(date(2024, 3, 1), date(2024, 3, 1));
        picker.handle_key(press(KeyCode::Left));
        assert_eq!(picker.cursor(), date(2024, 2, 29));
        assert_eq!(picker.view().left, date(2024, 2, 1));
        assert_eq!(picker.view().right, date(2024, 3, 1));
    }

    #[test]
    fn cursor_in_gap_month_moves_left_view() {
        let mut picker = picker(date(2024, 1, 31), date(2024, 6, 1));
        picker.handle_key(press(KeyCode::Right));
        assert_eq!(picker.cursor(), date(2024, 2, 1));
        assert_eq!(picker.view().left, date(2024, 2, 1));
        assert_eq!(picker.view().right, date(2024, 6, 1));
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut picker = picker(date(2024, 3, 1), date(2024, 3, 1));
        picker.close();
        assert!(!picker.handle_key(press(KeyCode::Char('r'))));
        assert!(!picker.selection().is_empty());
    }

    #[test]
    fn close_commits_pending_year_edit() {
        let mut picker = picker(date(2024, 3, 1), date(2024, 3, 1));
        picker.handle_key(press(KeyCode::Char('y')));
        for ch in "2019".chars() {
            picker.handle_key(press(KeyCode::Char(ch)));
        }
        picker.close();
        assert!(picker.year_edit().is_none());
        assert_eq!(picker.view().left, date(2019, 3, 1));
    }
}
