//! Pointer and keyboard input
//!
//! Provides the drag gesture state machine, keyboard code mapping and the
//! active-surface marker that scopes shortcuts.

mod drag;
mod keys;
mod surface;
mod result;

pub use drag::{DragEnd, DragState, DragSurface};
pub use keys::Key;
pub use surface::ActiveSurface;
pub use result::InputResult;
