//! Window lifecycle, focus and drag gestures

use log::{debug, warn};

use super::{view_context, DesktopEngine, Effect};
use crate::error::DesktopError;
use crate::input::ActiveSurface;
use crate::math::Vec2;
use crate::views::ContentView;
use crate::window::{Opened, WindowId, WindowKind};

impl DesktopEngine {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open the window behind a desktop icon
    pub fn activate_icon(&mut self, icon_id: &str) -> Result<(WindowId, Vec<Effect>), DesktopError> {
        let icon = self
            .icons
            .get(icon_id)
            .filter(|icon| icon.enabled)
            .ok_or_else(|| DesktopError::IconNotFound(icon_id.to_string()))?;
        let kind = icon.opens.clone();
        let glyph = icon.glyph.clone();
        Ok(self.open_window(kind, &glyph))
    }

    /// Open the admin panel; refused for non-admins
    pub fn open_admin_panel(&mut self) -> Result<(WindowId, Vec<Effect>), DesktopError> {
        if !self.is_admin {
            warn!("{}", DesktopError::AdminRequired);
            return Err(DesktopError::AdminRequired);
        }
        Ok(self.open_window(WindowKind::Admin, WindowKind::Admin.glyph()))
    }

    /// Open (or, single-instance, refocus) a window of `kind`
    pub fn open_window(&mut self, kind: WindowKind, glyph: &str) -> (WindowId, Vec<Effect>) {
        let opened = self.windows.open(kind.clone());
        let id = opened.id();
        self.surface = ActiveSurface::Window(id);

        let effects = match opened {
            Opened::Refocused(_) => Vec::new(),
            Opened::Created(_) => {
                let cx = view_context!(self);
                let mut view = ContentView::for_kind(&kind, glyph, &cx);
                let actions = view.on_open();
                debug!("window {} shows {} view", id, view.name());
                self.views.insert(id, view);
                self.process_actions(id, actions)
            }
        };
        (id, effects)
    }

    /// Close a window and drop its view.
    ///
    /// Requests still in flight for it are discarded on completion.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        if self.windows.close(id).is_none() {
            return false;
        }
        self.views.remove(&id);
        if self.drag.state().window_id() == Some(id) {
            self.drag.cancel();
        }
        if self.surface == ActiveSurface::Window(id) {
            self.surface = ActiveSurface::None;
        }
        debug!("closed window {}", id);
        true
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Focus a window, bring it to front and give it the keyboard
    pub fn focus_window(&mut self, id: WindowId) -> Result<(), DesktopError> {
        if !self.windows.focus(id) {
            return Err(DesktopError::WindowNotFound(id));
        }
        self.surface = ActiveSurface::Window(id);
        Ok(())
    }

    /// Click on the bare desktop
    pub fn clear_focus(&mut self) {
        self.windows.clear_focus();
        self.surface = ActiveSurface::None;
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Move a window by a delta
    pub fn move_window_by(&mut self, id: WindowId, delta: Vec2) -> Result<(), DesktopError> {
        if self.windows.move_by(id, delta) {
            Ok(())
        } else {
            Err(DesktopError::WindowNotFound(id))
        }
    }

    /// Pointer down on a title bar. Focuses the window.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Vec2) -> Result<(), DesktopError> {
        self.focus_window(id)?;
        self.drag.begin(id, pointer);
        Ok(())
    }

    /// Pointer moved; returns the visual translation of the dragged window
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<Vec2> {
        self.drag.update(pointer)
    }

    /// Pointer released; commits the gesture's total delta once
    pub fn end_drag(&mut self, pointer: Vec2) -> Option<WindowId> {
        let end = self.drag.end(pointer)?;
        if self.windows.move_by(end.window_id, end.delta) {
            Some(end.window_id)
        } else {
            None
        }
    }

    /// Abandon a gesture without moving anything
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_gateway::User;

    fn admin_engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.set_user(Some(User::new("u-1", "admin@studio64.com")));
        engine
    }

    #[test]
    fn test_activate_icon_opens_kind() {
        let mut engine = DesktopEngine::new();
        let (id, _) = engine.activate_icon("3").unwrap();
        assert_eq!(engine.windows.get(id).unwrap().kind, WindowKind::Merch);
        assert!(matches!(engine.view(id), Some(ContentView::Merch(_))));
        assert_eq!(engine.active_surface(), ActiveSurface::Window(id));
    }

    #[test]
    fn test_activate_unknown_or_disabled_icon() {
        let mut engine = admin_engine();
        assert_eq!(
            engine.activate_icon("99").unwrap_err(),
            DesktopError::IconNotFound("99".into())
        );
        engine.icons.toggle("1").unwrap();
        assert!(engine.activate_icon("1").is_err());
        assert_eq!(engine.windows.count(), 0);
    }

    #[test]
    fn test_admin_panel_requires_admin() {
        let mut engine = DesktopEngine::new();
        assert_eq!(engine.open_admin_panel().unwrap_err(), DesktopError::AdminRequired);
        assert_eq!(engine.windows.count(), 0);

        let mut engine = admin_engine();
        let (id, _) = engine.open_admin_panel().unwrap();
        assert!(matches!(engine.view(id), Some(ContentView::Admin(_))));
        // Existing uploads are listed on open
        assert_eq!(engine.pending.len(), 1);
    }

    #[test]
    fn test_close_resets_surface_and_drag() {
        let mut engine = DesktopEngine::new();
        let (id, _) = engine.activate_icon("1").unwrap();
        engine.begin_drag(id, Vec2::new(10.0, 10.0)).unwrap();

        assert!(engine.close_window(id));
        assert!(!engine.drag.state().is_dragging());
        assert_eq!(engine.active_surface(), ActiveSurface::None);
        assert!(engine.view(id).is_none());
        assert!(!engine.close_window(id));
    }

    #[test]
    fn test_drag_commits_once() {
        let mut engine = DesktopEngine::new();
        let (a, _) = engine.activate_icon("1").unwrap();
        let (b, _) = engine.activate_icon("2").unwrap();

        engine.begin_drag(a, Vec2::new(0.0, 0.0)).unwrap();
        assert_eq!(engine.windows.focused(), Some(a));
        engine.drag_to(Vec2::new(5.0, 5.0));
        engine.drag_to(Vec2::new(30.0, 12.0));

        // Nothing committed mid-gesture
        let p = engine.windows.get(a).unwrap().position;
        assert!((p.x - 100.0).abs() < 0.001);

        assert_eq!(engine.end_drag(Vec2::new(30.0, 12.0)), Some(a));
        let p = engine.windows.get(a).unwrap().position;
        assert!((p.x - 130.0).abs() < 0.001);
        assert!((p.y - 112.0).abs() < 0.001);
        assert_eq!(engine.end_drag(Vec2::new(50.0, 50.0)), None);

        let pb = engine.windows.get(b).unwrap().position;
        assert!((pb.x - 140.0).abs() < 0.001);
    }

    #[test]
    fn test_focus_missing_window() {
        let mut engine = DesktopEngine::new();
        assert!(engine.focus_window(4).unwrap_err().is_window_not_found());
        assert!(engine.move_window_by(4, Vec2::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn test_clear_focus_keeps_windows() {
        let mut engine = DesktopEngine::new();
        engine.activate_icon("1").unwrap();
        engine.clear_focus();
        assert_eq!(engine.windows.focused(), None);
        assert_eq!(engine.windows.count(), 1);
        assert_eq!(engine.active_surface(), ActiveSurface::None);
    }
}
