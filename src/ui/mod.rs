pub mod app;
pub mod calendar;
pub mod date_picker;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod picker;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod year_input;
