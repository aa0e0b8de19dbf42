//! Model-View-Intent primitives for the picker.
//!
//! ```text
//! gesture ──→ Intent ──→ Reducer ──→ State ──→ CalendarTree ──→ Frame
//!    ↑                                                           │
//!    └───────────────────────── hit map ─────────────────────────┘
//! ```
//!
//! Reducers are the only place state changes. Notifications and rendering
//! happen around the dispatch call, never inside it.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to snapshot, compared to detect changes,
/// and defaulted so a dispatch can `mem::take` the current value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents (user gestures or programmatic commands).
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
