//! Which content a window hosts

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;

/// Content hosted by a window, fixed when the window is created.
///
/// Single-instance bookkeeping compares kinds, so a language switch never
/// changes which window an icon maps to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "camelCase")]
pub enum WindowKind {
    Portfolio,
    MyFiles,
    Merch,
    RecycleBin,
    Admin,
    /// Admin-added icon with no dedicated view
    Generic(String),
}

impl WindowKind {
    /// Kind opened by one of the built-in icon ids
    pub fn for_builtin_icon(icon_id: &str) -> Option<Self> {
        match icon_id {
            "1" => Some(WindowKind::Portfolio),
            "2" => Some(WindowKind::MyFiles),
            "3" => Some(WindowKind::Merch),
            "4" => Some(WindowKind::RecycleBin),
            _ => None,
        }
    }

    /// Stable, untranslated label
    pub fn label(&self) -> &str {
        match self {
            WindowKind::Portfolio => "Portfolio",
            WindowKind::MyFiles => "My Files",
            WindowKind::Merch => "Merch",
            WindowKind::RecycleBin => "Recycle Bin",
            WindowKind::Admin => "Admin Panel",
            WindowKind::Generic(label) => label,
        }
    }

    /// Translation key for the title, if the kind has one
    pub fn title_key(&self) -> Option<&'static str> {
        match self {
            WindowKind::Portfolio => Some("desktop.portfolio"),
            WindowKind::MyFiles => Some("desktop.myFiles"),
            WindowKind::Merch => Some("desktop.merch"),
            WindowKind::RecycleBin => Some("desktop.recycleBin"),
            WindowKind::Admin => Some("desktop.adminPanel"),
            WindowKind::Generic(_) => None,
        }
    }

    /// Title in the translator's language
    pub fn title(&self, t: &Translator) -> String {
        match self.title_key() {
            Some(key) => t.t(key).to_string(),
            None => self.label().to_string(),
        }
    }

    /// Glyph shown in the title bar
    pub fn glyph(&self) -> &'static str {
        match self {
            WindowKind::Portfolio => "📁",
            WindowKind::MyFiles => "🗂️",
            WindowKind::Merch => "🛒",
            WindowKind::RecycleBin => "🗑️",
            WindowKind::Admin => "⚙️",
            WindowKind::Generic(_) => "📄",
        }
    }
}
