//! Drag gesture tracking for window title bars

use serde::Serialize;

use crate::math::Vec2;
use crate::window::WindowId;

/// Current drag operation state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Moving a window by its handle
    MoveWindow {
        /// Window being moved (opaque to the surface)
        window_id: WindowId,
        /// Pointer position at gesture start
        start: Vec2,
        /// Latest pointer position
        current: Vec2,
    },
}

impl DragState {
    /// Check if a gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Get the window ID if a gesture is in progress
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            DragState::MoveWindow { window_id, .. } => Some(*window_id),
            DragState::Idle => None,
        }
    }
}

/// Emitted once per completed gesture with its total delta.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEnd {
    pub window_id: WindowId,
    pub delta: Vec2,
}

/// Accumulates pointer movement for one handle at a time.
///
/// The translation during a gesture is visual only; the position is
/// committed once, from the [`DragEnd`] returned on release.
#[derive(Clone, Debug, Default)]
pub struct DragSurface {
    state: DragState,
}

impl DragSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture. A gesture already in progress is discarded.
    pub fn begin(&mut self, window_id: WindowId, pointer: Vec2) {
        self.state = DragState::MoveWindow {
            window_id,
            start: pointer,
            current: pointer,
        };
    }

    /// Record pointer movement, returning the visual translation so far
    pub fn update(&mut self, pointer: Vec2) -> Option<Vec2> {
        match &mut self.state {
            DragState::MoveWindow { start, current, .. } => {
                *current = pointer;
                Some(pointer - *start)
            }
            DragState::Idle => None,
        }
    }

    /// Finish the gesture at `pointer`
    pub fn end(&mut self, pointer: Vec2) -> Option<DragEnd> {
        match std::mem::take(&mut self.state) {
            DragState::MoveWindow { window_id, start, .. } => Some(DragEnd {
                window_id,
                delta: pointer - start,
            }),
            DragState::Idle => None,
        }
    }

    /// Abandon the gesture without emitting anything
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Window and translation to draw while dragging
    pub fn translation(&self) -> Option<(WindowId, Vec2)> {
        match self.state {
            DragState::MoveWindow { window_id, start, current } => Some((window_id, current - start)),
            DragState::Idle => None,
        }
    }

    #[inline]
    pub fn state(&self) -> &DragState {
        &self.state
    }
}
