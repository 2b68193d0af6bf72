//! Title bar and close affordance drawn around window content

use serde::Serialize;

use crate::i18n::Translator;
use super::{WindowId, WindowInstance};

/// Presentational view model for a window frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFrame {
    pub window_id: WindowId,
    pub title: String,
    pub glyph: String,
    pub focused: bool,
    /// Draw the focus highlight (focused and highlighting enabled)
    pub highlight: bool,
    pub x: f32,
    pub y: f32,
}

impl WindowFrame {
    /// Build the frame for `window`.
    ///
    /// `title` overrides the kind's default title (views with a folder
    /// open extend it).
    pub fn new(
        window: &WindowInstance,
        focused: Option<WindowId>,
        highlight_focused: bool,
        t: &Translator,
        title: Option<String>,
    ) -> Self {
        let is_focused = focused == Some(window.id);
        Self {
            window_id: window.id,
            title: title.unwrap_or_else(|| window.kind.title(t)),
            glyph: window.kind.glyph().to_string(),
            focused: is_focused,
            highlight: is_focused && highlight_focused,
            x: window.position.x,
            y: window.position.y,
        }
    }
}
