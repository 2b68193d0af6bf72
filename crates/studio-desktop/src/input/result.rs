//! Input result type

use serde::Serialize;

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was consumed (the page should prevent the default action)
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }

    /// Handled if `handled`, otherwise unhandled
    #[inline]
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }
}
