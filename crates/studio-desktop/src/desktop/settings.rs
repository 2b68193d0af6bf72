//! General settings from the admin panel's settings tab

use serde::{Deserialize, Serialize};

/// Desktop-wide toggles. All on by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSettings {
    /// Draw a highlight around the focused window
    pub highlight_focused: bool,
    /// Reuse an open window of the same kind
    pub single_instance: bool,
    /// Apply settings edits immediately instead of on "Save All Settings"
    pub auto_save: bool,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            highlight_focused: true,
            single_instance: true,
            auto_save: true,
        }
    }
}
