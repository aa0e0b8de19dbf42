use std::io;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::date::SystemClock;
use crate::ui::app::{default_picker_factory, App, AppSettings};
use crate::ui::events::EventHandler;
use crate::ui::popup::terminal_mouse_capture;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the host until the user quits. Returns the final range, if any.
pub fn run(settings: AppSettings, tick_rate: Duration) -> io::Result<Option<(NaiveDate, NaiveDate)>> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let factory = default_picker_factory(Arc::new(SystemClock), terminal_mouse_capture());
    let mut app = App::new(settings, factory);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!("host started");

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.apply_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Release mouse capture before the guard leaves the alternate screen.
    app.close_picker();
    let range = app.final_range();
    drop(guard);
    tracing::info!(?range, "host stopped");
    Ok(range)
}
