use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use chrono::NaiveDate;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use crate::date::{format_date, format_range, Clock};
use crate::ui::date_picker::{DateRangePicker, PickerOptions};
use crate::ui::events::AppEvent;
use crate::ui::layout::body_rect;
use crate::ui::picker::{Bounds, PickerObserver, RangeSelection};
use crate::ui::popup::CaptureFactory;

/// Builds a picker for each open. Injected by whoever hosts the app.
pub type PickerFactory =
    Arc<dyn Fn(PickerOptions, Box<dyn PickerObserver>) -> DateRangePicker + Send + Sync>;

pub fn default_picker_factory(clock: Arc<dyn Clock>, capture: CaptureFactory) -> PickerFactory {
    Arc::new(move |options: PickerOptions, observer: Box<dyn PickerObserver>| {
        DateRangePicker::new(options, Arc::clone(&clock), observer)
            .with_pointer_capture(Arc::clone(&capture))
    })
}

/// Picker notification waiting for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerNotice {
    Changed(RangeSelection),
    Reset,
}

/// Hands picker notifications to the app. The app drains them right after
/// the picker call that raised them, before the next event is applied.
pub struct ChannelObserver {
    tx: Sender<PickerNotice>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<PickerNotice>) -> Self {
        Self { tx }
    }
}

impl PickerObserver for ChannelObserver {
    fn on_change(&mut self, range: RangeSelection) {
        let _ = self.tx.send(PickerNotice::Changed(range));
    }

    fn on_reset(&mut self) {
        let _ = self.tx.send(PickerNotice::Reset);
    }
}

/// Everything the host needs at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub initial: RangeSelection,
    /// Selectable bounds; also the range a reset falls back to.
    pub defaults: Bounds,
    pub date_format: String,
}

/// Host for a single read-only range field that opens the picker.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    range: RangeSelection,
    defaults: Bounds,
    date_format: String,
    factory: PickerFactory,
    picker: Option<DateRangePicker>,
    notice_tx: Sender<PickerNotice>,
    notices: Receiver<PickerNotice>,
}

impl App {
    pub fn new(settings: AppSettings, factory: PickerFactory) -> Self {
        let (notice_tx, notices) = mpsc::channel();
        Self {
            should_quit: false,
            size: None,
            range: settings.initial,
            defaults: settings.defaults,
            date_format: settings.date_format,
            factory,
            picker: None,
            notice_tx,
            notices,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn range(&self) -> RangeSelection {
        self.range
    }

    /// Field text: `start - end`, empty when nothing is selected.
    pub fn field_text(&self) -> String {
        match self.range.reported() {
            RangeSelection {
                start: Some(start),
                end: Some(end),
            } => format_range(start, end, &self.date_format),
            _ => String::new(),
        }
    }

    pub fn bounds_text(&self) -> Option<String> {
        let describe = |date: Option<NaiveDate>| {
            date.map(|date| format_date(date, &self.date_format))
                .unwrap_or_else(|| "any".to_string())
        };
        if self.defaults == Bounds::unbounded() {
            return None;
        }
        Some(format!(
            "{} to {}",
            describe(self.defaults.min),
            describe(self.defaults.max)
        ))
    }

    /// Final range once the app exits.
    pub fn final_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let reported = self.range.reported();
        Some((reported.start?, reported.end?))
    }

    pub fn picker(&self) -> Option<&DateRangePicker> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut DateRangePicker> {
        self.picker.as_mut()
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker.as_ref().is_some_and(DateRangePicker::is_open)
    }

    /// Open the picker for the current field value. An already open picker
    /// is reused.
    pub fn open_picker(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            picker.open();
            return;
        }
        let reported = self.range.reported();
        let options = PickerOptions {
            mount: self.mount(),
            initial_start: reported.start,
            initial_end: reported.end,
            default_start: self.defaults.min,
            default_end: self.defaults.max,
        };
        let observer = Box::new(ChannelObserver::new(self.notice_tx.clone()));
        let mut picker = (self.factory)(options, observer);
        picker.open();
        tracing::info!(range = %self.field_text(), "opening date range picker");
        self.picker = Some(picker);
    }

    pub fn close_picker(&mut self) {
        if let Some(mut picker) = self.picker.take() {
            picker.close();
        }
    }

    /// A hidden picker is discarded; the next open builds a fresh one.
    fn discard_closed_picker(&mut self) {
        if self.picker.as_ref().is_some_and(|picker| !picker.is_open()) {
            self.picker = None;
        }
    }

    /// Route a key to the open picker. Returns true when it was consumed.
    pub fn on_picker_key(&mut self, key: KeyEvent) -> bool {
        let Some(picker) = self.picker.as_mut() else {
            return false;
        };
        let consumed = picker.handle_key(key);
        self.apply_picker_notices();
        self.discard_closed_picker();
        consumed
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if let Some(picker) = self.picker.as_mut() {
            picker.handle_mouse(mouse);
        }
        self.apply_picker_notices();
        self.discard_closed_picker();
    }

    /// Run the host side of every notification the last picker call raised.
    fn apply_picker_notices(&mut self) {
        while let Ok(notice) = self.notices.try_recv() {
            match notice {
                PickerNotice::Changed(range) => self.on_range_changed(range),
                PickerNotice::Reset => self.on_range_reset(),
            }
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let mount = self.mount();
        if let Some(picker) = self.picker.as_mut() {
            picker.set_mount(mount);
        }
    }

    pub fn on_tick(&mut self) {}

    pub fn on_range_changed(&mut self, range: RangeSelection) {
        tracing::info!(start = ?range.start, end = ?range.end, "range changed");
        self.range = range;
    }

    /// Reapply the default range when both ends are known. Otherwise the
    /// field keeps its value.
    pub fn on_range_reset(&mut self) {
        match self.defaults.range() {
            Some((start, end)) => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.set_dates(start, end);
                }
                self.range = RangeSelection::between(start, end);
                tracing::info!(%start, %end, "range reset to defaults");
            }
            None => tracing::info!("reset without a default range, field unchanged"),
        }
    }

    /// Apply one event from the loop.
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => crate::ui::input::handle_key(self, key),
            AppEvent::Mouse(mouse) => self.on_mouse(mouse),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
        }
    }

    fn mount(&self) -> Option<Rect> {
        self.size
            .map(|(cols, rows)| body_rect(Rect::new(0, 0, cols, rows)))
    }
}
