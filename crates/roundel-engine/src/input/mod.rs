//! Pointer input consumed by the press state machine.
//!
//! Public API is platform-agnostic. Hosts translate their touch/mouse events
//! into `PointerEvent`s and route them elsewhere when the result is `Ignored`.

mod types;

pub use types::{EventResult, PointerEvent, PointerPhase};
