//! Image gallery and lightbox

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::input::Key;
use crate::requests::{GatewayRequest, RequestOutcome};
use crate::views::{ViewAction, ViewContext};
use super::ImageFile;

/// Smallest zoom factor
pub const MIN_ZOOM: f32 = 0.25;
/// Largest zoom factor
pub const MAX_ZOOM: f32 = 3.0;
/// Zoom change per step
pub const ZOOM_STEP: f32 = 0.25;

/// Display mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    #[default]
    Gallery,
    Lightbox,
}

/// Page events for the image viewer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ImageInput {
    /// Thumbnail click
    Open { index: usize },
    CloseLightbox,
    ToggleLightbox,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    Rotate,
    ToggleGrid,
    #[serde(rename_all = "camelCase")]
    ToggleSelection { image_id: String },
    ClearSelection,
    DeleteSelected,
    DownloadCurrent,
    DownloadSelected,
    Close,
}

/// Gallery/lightbox state.
///
/// Zoom stays within [`MIN_ZOOM`, `MAX_ZOOM`] and rotation is one of
/// 0/90/180/270. Moving to another image resets both.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageViewer {
    images: Vec<ImageFile>,
    current: usize,
    mode: ImageMode,
    zoom: f32,
    rotation: u16,
    show_grid: bool,
    selected: BTreeSet<String>,
    deleting: bool,
    error: Option<String>,
}

impl ImageViewer {
    pub fn new(images: Vec<ImageFile>) -> Self {
        Self {
            images,
            current: 0,
            mode: ImageMode::Gallery,
            zoom: 1.0,
            rotation: 0,
            show_grid: true,
            selected: BTreeSet::new(),
            deleting: false,
            error: None,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn images(&self) -> &[ImageFile] {
        &self.images
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&ImageFile> {
        self.images.get(self.current)
    }

    #[inline]
    pub fn mode(&self) -> ImageMode {
        self.mode
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn rotation(&self) -> u16 {
        self.rotation
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Show `index` in the lightbox
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current = index;
        self.mode = ImageMode::Lightbox;
        self.reset_transform();
        true
    }

    pub fn close_lightbox(&mut self) {
        self.mode = ImageMode::Gallery;
    }

    pub fn toggle_lightbox(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.mode = match self.mode {
            ImageMode::Gallery => ImageMode::Lightbox,
            ImageMode::Lightbox => ImageMode::Gallery,
        };
    }

    /// Next image; stays on the last one
    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.images.len() {
            return false;
        }
        self.current += 1;
        self.reset_transform();
        true
    }

    /// Previous image; stays on the first one
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.reset_transform();
        true
    }

    // =========================================================================
    // Transform
    // =========================================================================

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Quarter turn clockwise
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 90) % 360;
    }

    fn reset_transform(&mut self) {
        self.zoom = 1.0;
        self.rotation = 0;
    }

    /// CSS transform for the lightbox image
    pub fn transform(&self) -> String {
        format!("scale({}) rotate({}deg)", self.zoom, self.rotation)
    }

    // =========================================================================
    // Selection and admin actions
    // =========================================================================

    pub fn toggle_selection(&mut self, image_id: &str) {
        if !self.selected.remove(image_id) && self.images.iter().any(|i| i.id == image_id) {
            self.selected.insert(image_id.to_string());
        }
    }

    /// Delete request for the selection (administrators only)
    pub fn delete_selected(&mut self, is_admin: bool) -> Option<GatewayRequest> {
        if !is_admin || self.deleting || self.selected.is_empty() {
            return None;
        }
        let chosen: Vec<&ImageFile> = self
            .images
            .iter()
            .filter(|i| self.selected.contains(&i.id))
            .collect();
        let request = GatewayRequest::DeleteImages {
            ids: chosen.iter().map(|i| i.id.clone()).collect(),
            paths: chosen.iter().map(|i| i.storage_path()).collect(),
        };
        self.deleting = true;
        self.error = None;
        Some(request)
    }

    fn remove_images(&mut self, ids: &[String]) {
        self.images.retain(|i| !ids.contains(&i.id));
        for id in ids {
            self.selected.remove(id);
        }
        if self.images.is_empty() {
            self.current = 0;
            self.mode = ImageMode::Gallery;
        } else {
            self.current = self.current.min(self.images.len() - 1);
        }
    }

    fn download(image: &ImageFile) -> ViewAction {
        ViewAction::Download {
            url: image.file_url.clone(),
            filename: image.filename.clone(),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Apply a page event
    pub fn apply(&mut self, input: ImageInput, cx: &ViewContext) -> Vec<ViewAction> {
        match input {
            ImageInput::Open { index } => {
                self.open(index);
            }
            ImageInput::CloseLightbox => self.close_lightbox(),
            ImageInput::ToggleLightbox => self.toggle_lightbox(),
            ImageInput::Next => {
                self.next();
            }
            ImageInput::Previous => {
                self.previous();
            }
            ImageInput::ZoomIn => self.zoom_in(),
            ImageInput::ZoomOut => self.zoom_out(),
            ImageInput::Rotate => self.rotate(),
            ImageInput::ToggleGrid => self.show_grid = !self.show_grid,
            ImageInput::ToggleSelection { image_id } => {
                if cx.is_admin {
                    self.toggle_selection(&image_id);
                }
            }
            ImageInput::ClearSelection => self.selected.clear(),
            ImageInput::DeleteSelected => {
                return self
                    .delete_selected(cx.is_admin)
                    .map(ViewAction::Request)
                    .into_iter()
                    .collect();
            }
            ImageInput::DownloadCurrent => {
                return self.current().map(Self::download).into_iter().collect();
            }
            ImageInput::DownloadSelected => {
                return self
                    .images
                    .iter()
                    .filter(|i| self.selected.contains(&i.id))
                    .map(Self::download)
                    .collect();
            }
            ImageInput::Close => return vec![ViewAction::CloseWindow],
        }
        Vec::new()
    }

    /// Keyboard shortcuts. `None` when the key means nothing here.
    pub fn handle_key(&mut self, key: Key) -> Option<Vec<ViewAction>> {
        match key {
            Key::ArrowLeft => {
                self.previous();
            }
            Key::ArrowRight => {
                self.next();
            }
            Key::Escape => {
                if self.mode == ImageMode::Lightbox {
                    self.close_lightbox();
                } else {
                    return Some(vec![ViewAction::CloseWindow]);
                }
            }
            Key::F => self.toggle_lightbox(),
            Key::ZoomIn => self.zoom_in(),
            Key::ZoomOut => self.zoom_out(),
            Key::R => self.rotate(),
            _ => return None,
        }
        Some(Vec::new())
    }

    /// Completion of a request issued by this viewer
    pub fn on_complete(&mut self, request: &GatewayRequest, outcome: RequestOutcome) {
        if !matches!(request, GatewayRequest::DeleteImages { .. }) {
            return;
        }
        self.deleting = false;
        match outcome {
            RequestOutcome::ImagesDeleted { ids } => self.remove_images(&ids),
            RequestOutcome::Failed { message } => self.error = Some(message),
            _ => {}
        }
    }

    pub fn render(&self, cx: &ViewContext) -> Value {
        json!({
            "images": self.images.iter().map(|i| json!({
                "image": i,
                "size": i.size_label(),
                "selected": self.selected.contains(&i.id),
            })).collect::<Vec<_>>(),
            "currentIndex": self.current,
            "counter": if self.images.is_empty() {
                String::new()
            } else {
                format!("{} / {}", self.current + 1, self.images.len())
            },
            "mode": self.mode,
            "zoom": self.zoom,
            "rotation": self.rotation,
            "transform": self.transform(),
            "showGrid": self.show_grid,
            "selectedCount": self.selected.len(),
            "canSelect": cx.is_admin,
            "deleting": self.deleting,
            "error": self.error,
            "emptyMessage": cx.translator.t("images.empty"),
        })
    }
}
