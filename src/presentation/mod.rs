//! Presentation mode: slide navigation, sub-steps and the seat grid
//!
//! - [`controller`]: the [`Presenter`] state machine
//! - [`grid`]: pure derivation of the [`SeatGrid`] from a diagram step
//! - [`keys`]: key-to-intent mapping and scoped listener registration

pub mod controller;
pub mod grid;
pub mod keys;

pub use controller::{PresentationState, Presenter, DEFAULT_COOLDOWN, MAX_FLOWCHART_STEPS};
pub use grid::{Seat, SeatGrid, COLS, MAX_DIAGRAM_STEPS, ROWS};
pub use keys::{intent_for, ListenerGuard, ListenerRegistry, NavIntent};
