//! Keyboard codes the views respond to

use serde::{Deserialize, Serialize};

/// A shortcut key, decoded from `KeyboardEvent.code`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    F,
    R,
    /// `=` or numpad `+`
    ZoomIn,
    /// `-` or numpad `-`
    ZoomOut,
}

impl Key {
    /// Decode a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Key::Space),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "Escape" => Some(Key::Escape),
            "KeyF" => Some(Key::F),
            "KeyR" => Some(Key::R),
            "Equal" | "NumpadAdd" => Some(Key::ZoomIn),
            "Minus" | "NumpadSubtract" => Some(Key::ZoomOut),
            _ => None,
        }
    }
}
