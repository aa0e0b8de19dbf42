//! Range-selection state machine.

mod intent;
mod observer;
mod preset;
mod reducer;
mod state;

pub use intent::PickerIntent;
pub use observer::{FnObserver, NoopObserver, PickerObserver};
pub use preset::QuickSelect;
pub use reducer::PickerReducer;
pub use state::{Bounds, RangePickerState, RangeSelection, Side, ViewPair};
