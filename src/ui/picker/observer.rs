//! Boundary callbacks of the picker.

use super::state::RangeSelection;

/// Receives selection changes and explicit resets.
///
/// `on_change` fires after every day click (a pending selection is reported
/// as a single-day range) and after every quick-select. `on_reset` fires once
/// per explicit reset; the embedding caller decides what a reset means.
pub trait PickerObserver {
    fn on_change(&mut self, range: RangeSelection);
    fn on_reset(&mut self);
}

/// Adapts a pair of closures to [`PickerObserver`].
pub struct FnObserver<C, R> {
    on_change: C,
    on_reset: R,
}

impl<C, R> FnObserver<C, R>
where
    C: FnMut(RangeSelection),
    R: FnMut(),
{
    pub fn new(on_change: C, on_reset: R) -> Self {
        Self {
            on_change,
            on_reset,
        }
    }
}

impl<C, R> PickerObserver for FnObserver<C, R>
where
    C: FnMut(RangeSelection),
    R: FnMut(),
{
    fn on_change(&mut self, range: RangeSelection) {
        (self.on_change)(range);
    }

    fn on_reset(&mut self) {
        (self.on_reset)();
    }
}

/// Ignores every notification.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl PickerObserver for NoopObserver {
    fn on_change(&mut self, _range: RangeSelection) {}

    fn on_reset(&mut self) {}
}
