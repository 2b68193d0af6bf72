//! Commands consumed by the desktop store

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::window::WindowId;
use super::DesktopSettings;

/// A change request for desktop-wide state.
///
/// Produced by the toolbar, the desktop surface and the admin panel; the
/// engine applies them in arrival order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DesktopCommand {
    #[serde(rename_all = "camelCase")]
    ActivateIcon { icon_id: String },
    OpenAdminPanel,
    #[serde(rename_all = "camelCase")]
    CloseWindow { window_id: WindowId },
    #[serde(rename_all = "camelCase")]
    FocusWindow { window_id: WindowId },
    ClearFocus,
    #[serde(rename_all = "camelCase")]
    MoveWindow { window_id: WindowId, dx: f32, dy: f32 },
    #[serde(rename_all = "camelCase")]
    ToggleIcon { icon_id: String },
    AddIcon { label: String, glyph: String },
    #[serde(rename_all = "camelCase")]
    RemoveIcon { icon_id: String },
    /// Apply an uploaded image and persist it
    ApplyBackgroundImage { url: String },
    /// Apply a session-only image (not persisted)
    UseSessionBackground { url: String },
    /// Back to the default gradient, clearing the persisted image
    ResetBackground,
    ApplySettings { settings: DesktopSettings },
    SetLanguage { language: Language },
}

impl DesktopCommand {
    /// Check whether only administrators may issue this command
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            DesktopCommand::OpenAdminPanel
                | DesktopCommand::ToggleIcon { .. }
                | DesktopCommand::AddIcon { .. }
                | DesktopCommand::RemoveIcon { .. }
                | DesktopCommand::ApplyBackgroundImage { .. }
                | DesktopCommand::ApplySettings { .. }
        )
    }
}
