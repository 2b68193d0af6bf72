//! Keyboard routing and page events for window content

use log::debug;

use super::{view_context, DesktopEngine, Effect};
use crate::error::DesktopError;
use crate::input::{ActiveSurface, InputResult, Key};
use crate::views::ViewInput;
use crate::window::WindowId;

impl DesktopEngine {
    /// Handle a key press (`KeyboardEvent.code`).
    ///
    /// Only the view of the active window sees it. While a text field has
    /// focus nothing does.
    pub fn handle_key(&mut self, code: &str) -> (InputResult, Vec<Effect>) {
        let Some(key) = Key::from_code(code) else {
            return (InputResult::Unhandled, Vec::new());
        };
        let Some(id) = self.surface.shortcut_target() else {
            return (InputResult::Unhandled, Vec::new());
        };
        let Some(view) = self.views.get_mut(&id) else {
            return (InputResult::Unhandled, Vec::new());
        };

        let actions = view.handle_key(key);
        let result = InputResult::from_bool(actions.is_some());
        let effects = match actions {
            Some(actions) => self.process_actions(id, actions),
            None => Vec::new(),
        };
        (result, effects)
    }

    /// A text field gained (`true`) or lost focus
    pub fn set_text_input_active(&mut self, active: bool) {
        self.surface = if active {
            ActiveSurface::TextInput
        } else {
            self.windows
                .focused()
                .map(ActiveSurface::Window)
                .unwrap_or(ActiveSurface::None)
        };
    }

    /// Deliver a page event to a window's view
    pub fn handle_view_input(&mut self, window_id: WindowId, input: ViewInput) -> Result<Vec<Effect>, DesktopError> {
        let cx = view_context!(self);
        let view = self
            .views
            .get_mut(&window_id)
            .ok_or(DesktopError::WindowNotFound(window_id))?;
        let actions = view.handle(input, &cx)?;
        debug!("window {} produced {} actions", window_id, actions.len());
        Ok(self.process_actions(window_id, actions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{ImageInput, ImageMode};
    use crate::views::{ContentView, PortfolioInput};

    fn engine_with_photos() -> (DesktopEngine, WindowId) {
        let mut engine = DesktopEngine::new();
        let (id, _) = engine.activate_icon("1").unwrap();
        engine
            .handle_view_input(
                id,
                ViewInput::Portfolio(PortfolioInput::OpenFolder {
                    folder_id: "photos".into(),
                }),
            )
            .unwrap();
        engine
            .handle_view_input(id, ViewInput::Portfolio(PortfolioInput::Image(ImageInput::Open { index: 0 })))
            .unwrap();
        (engine, id)
    }

    fn viewer_index(engine: &DesktopEngine, id: WindowId) -> usize {
        match engine.view(id) {
            Some(ContentView::Portfolio(view)) => view.image_viewer().unwrap().current_index(),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_keys_reach_active_window() {
        let (mut engine, id) = engine_with_photos();
        let (result, _) = engine.handle_key("ArrowRight");
        assert!(result.is_handled());
        assert_eq!(viewer_index(&engine, id), 1);
    }

    #[test]
    fn test_key_ignored_by_view_is_unhandled() {
        let (mut engine, id) = engine_with_photos();
        let (result, effects) = engine.handle_key("Space");
        assert_eq!(result, InputResult::Unhandled);
        assert!(effects.is_empty());
        assert_eq!(viewer_index(&engine, id), 0);
    }

    #[test]
    fn test_text_input_swallows_keys() {
        let (mut engine, id) = engine_with_photos();
        engine.set_text_input_active(true);
        let (result, _) = engine.handle_key("ArrowRight");
        assert_eq!(result, InputResult::Unhandled);
        assert_eq!(viewer_index(&engine, id), 0);

        engine.set_text_input_active(false);
        assert_eq!(engine.active_surface(), ActiveSurface::Window(id));
    }

    #[test]
    fn test_bare_desktop_gets_no_keys() {
        let (mut engine, id) = engine_with_photos();
        engine.clear_focus();
        assert!(!engine.handle_key("ArrowRight").0.is_handled());
        assert_eq!(viewer_index(&engine, id), 0);
        assert!(!engine.handle_key("KeyQ").0.is_handled());
    }

    #[test]
    fn test_escape_leaves_lightbox_then_closes() {
        let (mut engine, id) = engine_with_photos();
        engine.handle_key("Escape");
        match engine.view(id) {
            Some(ContentView::Portfolio(view)) => {
                assert_eq!(view.image_viewer().unwrap().mode(), ImageMode::Gallery)
            }
            other => panic!("unexpected view {:?}", other),
        }

        engine.handle_key("Escape");
        assert!(engine.windows.get(id).is_none());
        assert_eq!(engine.active_surface(), ActiveSurface::None);
    }

    #[test]
    fn test_view_input_for_missing_window() {
        let mut engine = DesktopEngine::new();
        let err = engine
            .handle_view_input(9, ViewInput::Portfolio(PortfolioInput::Back))
            .unwrap_err();
        assert!(err.is_window_not_found());
    }
}
