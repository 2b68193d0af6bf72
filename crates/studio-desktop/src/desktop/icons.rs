//! Desktop icon set edited from the admin panel

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;
use crate::window::WindowKind;

/// A desktop shortcut.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopIcon {
    pub id: String,
    pub label: String,
    pub glyph: String,
    pub enabled: bool,
    /// Window kind opened on activation, resolved when the icon is created
    pub opens: WindowKind,
}

impl DesktopIcon {
    fn builtin(id: &str, label: &str, glyph: &str) -> Self {
        let opens = WindowKind::for_builtin_icon(id)
            .unwrap_or_else(|| WindowKind::Generic(label.to_string()));
        Self {
            id: id.to_string(),
            label: label.to_string(),
            glyph: glyph.to_string(),
            enabled: true,
            opens,
        }
    }
}

/// Ordered icon list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconSet {
    icons: Vec<DesktopIcon>,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            icons: vec![
                DesktopIcon::builtin("1", "Portfolio", "📁"),
                DesktopIcon::builtin("2", "My Files", "🗂️"),
                DesktopIcon::builtin("3", "Merch", "🛒"),
                DesktopIcon::builtin("4", "Recycle Bin", "🗑️"),
            ],
        }
    }
}

impl IconSet {
    /// Every icon, enabled or not
    pub fn all(&self) -> &[DesktopIcon] {
        &self.icons
    }

    /// Icons shown on the desktop
    pub fn enabled(&self) -> impl Iterator<Item = &DesktopIcon> {
        self.icons.iter().filter(|i| i.enabled)
    }

    /// Number of enabled icons
    pub fn active_count(&self) -> usize {
        self.enabled().count()
    }

    pub fn get(&self, id: &str) -> Option<&DesktopIcon> {
        self.icons.iter().find(|i| i.id == id)
    }

    /// Flip an icon's enabled flag, returning the new value
    pub fn toggle(&mut self, id: &str) -> Result<bool, DesktopError> {
        let icon = self
            .icons
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DesktopError::IconNotFound(id.to_string()))?;
        icon.enabled = !icon.enabled;
        Ok(icon.enabled)
    }

    /// Append an enabled icon opening a generic window.
    ///
    /// Label and glyph are trimmed and must not be blank. The id is derived
    /// from `now_ms`, bumped until unique.
    pub fn add(&mut self, label: &str, glyph: &str, now_ms: u64) -> Result<&DesktopIcon, DesktopError> {
        let label = label.trim();
        let glyph = glyph.trim();
        if label.is_empty() || glyph.is_empty() {
            return Err(DesktopError::InvalidIcon);
        }

        let mut stamp = now_ms;
        while self.get(&stamp.to_string()).is_some() {
            stamp += 1;
        }

        self.icons.push(DesktopIcon {
            id: stamp.to_string(),
            label: label.to_string(),
            glyph: glyph.to_string(),
            enabled: true,
            opens: WindowKind::Generic(label.to_string()),
        });
        let index = self.icons.len() - 1;
        Ok(&self.icons[index])
    }

    /// Remove an icon
    pub fn remove(&mut self, id: &str) -> Result<DesktopIcon, DesktopError> {
        let index = self
            .icons
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| DesktopError::IconNotFound(id.to_string()))?;
        Ok(self.icons.remove(index))
    }
}
