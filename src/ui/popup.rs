//! Popup visibility with paired pointer-capture acquisition.

use std::fmt;
use std::io;
use std::sync::Arc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::ExecutableCommand;

/// Releases whatever was acquired when the popup opened. Dropping the guard
/// is the only release path.
pub struct CaptureGuard {
    release: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl CaptureGuard {
    pub fn new<F: FnOnce() + Send + 'static>(release: F) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Acquires pointer capture for an open popup.
pub type CaptureFactory = Arc<dyn Fn() -> CaptureGuard + Send + Sync>;

pub fn no_capture() -> CaptureFactory {
    Arc::new(CaptureGuard::noop)
}

/// Enables terminal mouse reporting; the guard disables it again.
pub fn terminal_mouse_capture() -> CaptureFactory {
    Arc::new(|| {
        if let Err(err) = io::stdout().execute(EnableMouseCapture) {
            tracing::warn!(%err, "failed to enable mouse capture");
            return CaptureGuard::noop();
        }
        CaptureGuard::new(|| {
            let _ = io::stdout().execute(DisableMouseCapture);
        })
    })
}

/// At most one open popup; opening again while open reuses it.
pub struct PopupState {
    capture: CaptureFactory,
    open: Option<CaptureGuard>,
}

impl PopupState {
    pub fn new(capture: CaptureFactory) -> Self {
        Self {
            capture,
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Returns false when the popup was already open.
    pub fn open(&mut self) -> bool {
        if self.open.is_some() {
            return false;
        }
        self.open = Some((self.capture)());
        true
    }

    /// Returns false when the popup was already hidden.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}

impl Default for PopupState {
    fn default() -> Self {
        Self::new(no_capture())
    }
}
