//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use calrange::date::FixedClock;
use calrange::ui::date_picker::{DateRangePicker, PickerOptions};
use calrange::ui::picker::{FnObserver, RangeSelection};
use chrono::NaiveDate;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed "today" used across the suite.
pub fn today() -> NaiveDate {
    date(2024, 3, 15)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Everything the observer heard.
#[derive(Debug, Default)]
pub struct Recorded {
    pub changes: Vec<RangeSelection>,
    pub resets: usize,
}

pub type Recorder = Rc<RefCell<Recorded>>;

/// Picker wired to a recording observer, today fixed at 2024-03-15.
pub fn make_picker(options: PickerOptions) -> (DateRangePicker, Recorder) {
    let recorded: Recorder = Rc::new(RefCell::new(Recorded::default()));
    let on_change = Rc::clone(&recorded);
    let on_reset = Rc::clone(&recorded);
    let observer = FnObserver::new(
        move |range: RangeSelection| on_change.borrow_mut().changes.push(range),
        move || on_reset.borrow_mut().resets += 1,
    );
    let picker = DateRangePicker::new(options, Arc::new(FixedClock(today())), Box::new(observer));
    (picker, recorded)
}

pub fn range_options(start: NaiveDate, end: NaiveDate) -> PickerOptions {
    PickerOptions {
        initial_start: Some(start),
        initial_end: Some(end),
        ..PickerOptions::default()
    }
}

pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).unwrap()
}

/// Draw once so the hit map reflects the current state.
pub fn draw(terminal: &mut Terminal<TestBackend>, picker: &mut DateRangePicker) {
    terminal.draw(|frame| picker.render(frame)).unwrap();
}

/// Whole screen as text, one line per row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
