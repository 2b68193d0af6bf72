//! Render snapshot handed to the page after every change

use serde::Serialize;
use serde_json::Value;

use super::{view_context, DesktopEngine};
use crate::desktop::{Background, BackgroundStyle, DesktopIcon, Toolbar};
use crate::input::ActiveSurface;
use crate::math::Vec2;
use crate::window::{WindowFrame, WindowId};

/// Window with its frame, live drag offset and content state
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedWindow {
    pub frame: WindowFrame,
    /// Visual offset of an in-progress drag (not yet committed)
    pub translation: Vec2,
    pub content: Value,
}

/// Everything the page needs to draw the desktop
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSnapshot {
    pub toolbar: Toolbar,
    pub background: Background,
    pub background_style: BackgroundStyle,
    /// Enabled icons in display order
    pub icons: Vec<DesktopIcon>,
    /// Back to front
    pub windows: Vec<RenderedWindow>,
    pub focused: Option<WindowId>,
    pub active_surface: ActiveSurface,
    pub is_admin: bool,
    pub pending_count: usize,
}

impl DesktopEngine {
    /// Build the render snapshot
    pub fn snapshot(&self) -> DesktopSnapshot {
        let cx = view_context!(self);
        let focused = self.windows.focused();
        let drag = self.drag.translation();

        let windows = self
            .windows
            .windows()
            .iter()
            .map(|window| {
                let view = self.views.get(&window.id);
                let title = view.and_then(|v| v.title(&cx));
                let translation = match drag {
                    Some((id, offset)) if id == window.id => offset,
                    _ => Vec2::ZERO,
                };
                RenderedWindow {
                    frame: WindowFrame::new(
                        window,
                        focused,
                        self.settings.highlight_focused,
                        &self.translator,
                        title,
                    ),
                    translation,
                    content: view.map(|v| v.render(&cx)).unwrap_or(Value::Null),
                }
            })
            .collect();

        DesktopSnapshot {
            toolbar: Toolbar::new(&self.translator, self.is_admin),
            background: self.background.clone(),
            background_style: self.background.style(),
            icons: self.icons.enabled().cloned().collect(),
            windows,
            focused,
            active_surface: self.surface,
            is_admin: self.is_admin,
            pending_count: self.pending.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_order_and_focus() {
        let mut engine = DesktopEngine::new();
        let (a, _) = engine.activate_icon("1").unwrap();
        let (b, _) = engine.activate_icon("2").unwrap();
        engine.focus_window(a).unwrap();

        let snapshot = engine.snapshot();
        let order: Vec<WindowId> = snapshot.windows.iter().map(|w| w.frame.window_id).collect();
        assert_eq!(order, vec![b, a]);
        assert_eq!(snapshot.focused, Some(a));
        assert!(snapshot.windows[1].frame.highlight);
        assert!(!snapshot.windows[0].frame.focused);
        assert_eq!(snapshot.icons.len(), 4);
        assert!(!snapshot.toolbar.menu_enabled);
    }

    #[test]
    fn test_snapshot_drag_translation() {
        let mut engine = DesktopEngine::new();
        let (a, _) = engine.activate_icon("1").unwrap();
        engine.begin_drag(a, Vec2::new(0.0, 0.0)).unwrap();
        engine.drag_to(Vec2::new(12.0, -3.0));

        let snapshot = engine.snapshot();
        let window = &snapshot.windows[0];
        assert!((window.translation.x - 12.0).abs() < 0.001);
        assert!((window.frame.x - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut engine = DesktopEngine::new();
        engine.activate_icon("3").unwrap();
        let value = serde_json::to_value(engine.snapshot()).unwrap();

        assert_eq!(value["background"]["kind"], "gradient");
        assert_eq!(value["windows"][0]["frame"]["title"], "Merch");
        assert_eq!(value["activeSurface"]["type"], "window");
        assert_eq!(value["pendingCount"], 0);
    }
}
