//! Window manager for lifecycle, focus, and render order

use log::debug;

use crate::config::DesktopConfig;
use crate::math::{Rect, Size, Vec2};
use super::{WindowId, WindowInstance, WindowKind};

/// Result of [`WindowManager::open`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opened {
    /// A new window was created
    Created(WindowId),
    /// An existing window of the same kind was brought to front
    Refocused(WindowId),
}

impl Opened {
    /// Id of the window now in front
    #[inline]
    pub fn id(self) -> WindowId {
        match self {
            Opened::Created(id) | Opened::Refocused(id) => id,
        }
    }

    /// Check if a new window was created
    #[inline]
    pub fn is_new(self) -> bool {
        matches!(self, Opened::Created(_))
    }
}

/// Window manager owning the open windows and the focus marker.
///
/// `windows` is kept in render order: the last entry paints on top.
pub struct WindowManager {
    /// Open windows, back to front
    windows: Vec<WindowInstance>,
    /// Focused window (always an open one)
    focused: Option<WindowId>,
    /// Next window ID
    next_id: WindowId,
    /// Reuse an open window of the same kind instead of opening another
    single_instance: bool,
    /// Position of the first window
    cascade_origin: Vec2,
    /// Offset per already-open window
    cascade_step: f32,
    /// Clamp moves to `bounds`
    clamp: bool,
    /// Viewport (desktop area) rectangle
    bounds: Option<Rect>,
    /// Nominal window size for clamping
    window_size: Size,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a window manager with default settings
    pub fn new() -> Self {
        Self::with_config(&DesktopConfig::default())
    }

    /// Create a window manager from configuration
    pub fn with_config(config: &DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            next_id: 1,
            single_instance: true,
            cascade_origin: config.cascade_origin,
            cascade_step: config.cascade_step,
            clamp: config.clamp_to_viewport,
            bounds: None,
            window_size: config.window_size,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a window of `kind`.
    ///
    /// With single-instance on, an open window of the same kind is moved to
    /// the front and focused without changing its position.
    pub fn open(&mut self, kind: WindowKind) -> Opened {
        if self.single_instance {
            if let Some(id) = self.find_kind(&kind) {
                self.focus(id);
                debug!("refocused existing {} window {}", kind.label(), id);
                return Opened::Refocused(id);
            }
        }

        let id = self.next_id;
        self.next_id += 1;

        let offset = self.cascade_step * self.windows.len() as f32;
        let mut position = self.cascade_origin + Vec2::splat(offset);
        if let Some(bounds) = self.clamp_bounds() {
            position = bounds.clamp_origin(position, self.window_size);
        }

        debug!("opened {} window {} at ({}, {})", kind.label(), id, position.x, position.y);
        self.windows.push(WindowInstance { id, kind, position });
        self.focused = Some(id);

        Opened::Created(id)
    }

    /// Close a window. Clears focus if it was focused; nothing is refocused.
    pub fn close(&mut self, id: WindowId) -> Option<WindowInstance> {
        let index = self.index_of(id)?;
        let window = self.windows.remove(index);
        if self.focused == Some(id) {
            self.focused = None;
        }
        Some(window)
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Focus a window and move it to the front. Returns false if not open.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let window = self.windows.remove(index);
        self.windows.push(window);
        self.focused = Some(id);
        true
    }

    /// Clear the focus marker (click on empty desktop)
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Get the currently focused window ID
    #[inline]
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// Check if `id` is focused
    #[inline]
    pub fn is_focused(&self, id: WindowId) -> bool {
        self.focused == Some(id)
    }

    // =========================================================================
    // Position
    // =========================================================================

    /// Add a delta to a window's position. Returns false if not open.
    pub fn move_by(&mut self, id: WindowId, delta: Vec2) -> bool {
        let bounds = self.clamp_bounds();
        let size = self.window_size;
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(window) => {
                window.position += delta;
                if let Some(bounds) = bounds {
                    window.position = bounds.clamp_origin(window.position, size);
                }
                true
            }
            None => false,
        }
    }

    /// Set the viewport rectangle used for clamping
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Turn viewport clamping on or off
    pub fn set_clamp(&mut self, clamp: bool) {
        self.clamp = clamp;
    }

    fn clamp_bounds(&self) -> Option<Rect> {
        if self.clamp {
            self.bounds
        } else {
            None
        }
    }

    // =========================================================================
    // Policy
    // =========================================================================

    /// Turn the single-instance policy on or off
    pub fn set_single_instance(&mut self, on: bool) {
        self.single_instance = on;
    }

    /// Check whether the single-instance policy is on
    #[inline]
    pub fn single_instance(&self) -> bool {
        self.single_instance
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// First open window of `kind`
    pub fn find_kind(&self, kind: &WindowKind) -> Option<WindowId> {
        self.windows.iter().find(|w| w.kind == *kind).map(|w| w.id)
    }

    /// Windows in render order (back to front)
    #[inline]
    pub fn windows(&self) -> &[WindowInstance] {
        &self.windows
    }

    /// Front-most window
    pub fn front(&self) -> Option<&WindowInstance> {
        self.windows.last()
    }

    /// Get the number of windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }
}
