//! Which surface currently owns keyboard input

use serde::{Deserialize, Serialize};

use crate::window::WindowId;

/// Keyboard owner.
///
/// Shortcuts are delivered only to the view of `Window(id)`; a focused text
/// field swallows them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "windowId", rename_all = "camelCase")]
pub enum ActiveSurface {
    /// Bare desktop, nothing receives shortcuts
    #[default]
    None,
    /// A text input has focus
    TextInput,
    /// A window's content has focus
    Window(WindowId),
}

impl ActiveSurface {
    /// Window that should receive shortcuts
    pub fn shortcut_target(self) -> Option<WindowId> {
        match self {
            ActiveSurface::Window(id) => Some(id),
            ActiveSurface::None | ActiveSurface::TextInput => None,
        }
    }
}
