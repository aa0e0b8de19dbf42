//! Calendar renderer: state -> visual tree -> frame + hit map.

mod dialog;
mod tree;

pub use dialog::{render_calendar, HitMap, POPUP_HEIGHT, POPUP_WIDTH};
pub use tree::{
    build_tree, classify_day, day_cells, month_grid, Button, CalendarTree, DayCell, DayClass,
    MonthGrid, MonthHeader, PickerAction, YearLabel,
};
