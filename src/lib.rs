pub mod args;
pub mod config;
pub mod date;
pub mod logging;
pub mod ui;
