//! Font list with live preview, lazy face loading and admin upload/delete

use std::collections::BTreeSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use studio_gateway::{validate_font_file, FontMetadata, UploadFile};

use crate::input::Key;
use crate::requests::{GatewayRequest, RequestOutcome};
use crate::views::{ViewAction, ViewContext};
use super::format::{font_preview_text, font_weight_name, format_file_size};
use super::{fallback_fonts, FontFile};

/// Preview size in pixels before any adjustment
pub const DEFAULT_FONT_SIZE: u32 = 24;
const MIN_FONT_SIZE: u32 = 12;
const MAX_FONT_SIZE: u32 = 72;
const DEFAULT_TEXT_COLOR: &str = "#000000";
const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// A font face the page should register before previewing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFace {
    pub font_id: String,
    pub family: String,
    pub url: String,
    pub weight: String,
    pub style: String,
    pub format: Option<String>,
}

impl From<&FontFile> for FontFace {
    fn from(font: &FontFile) -> Self {
        Self {
            font_id: font.id.clone(),
            family: font.font_family.clone(),
            url: font.file_url.clone(),
            weight: font.font_weight.clone(),
            style: font.font_style.clone(),
            format: font.css_format().map(str::to_string),
        }
    }
}

/// Page events for the font previewer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum FontInput {
    #[serde(rename_all = "camelCase")]
    Select { font_id: String },
    SetPreviewText { text: String },
    SetFontSize { size: u32 },
    SetTextColor { color: String },
    SetBackgroundColor { color: String },
    ResetPreview,
    ToggleGrid,
    Reload,
    /// Admin upload (the page confirms the file picker)
    Upload { file: UploadFile },
    /// Admin delete (the page confirms with the user first)
    #[serde(rename_all = "camelCase")]
    Delete { font_id: String },
    #[serde(rename_all = "camelCase")]
    Download { font_id: String },
    /// The page finished registering a face
    #[serde(rename_all = "camelCase")]
    FaceLoaded { font_id: String },
    #[serde(rename_all = "camelCase")]
    FaceFailed { font_id: String },
    DismissError,
    Close,
}

/// Font previewer state.
///
/// A font id is never in both `loading` and `loaded`.
#[derive(Clone, Debug, PartialEq)]
pub struct FontPreviewer {
    fonts: Vec<FontFile>,
    selected: Option<String>,
    preview_text: String,
    font_size: u32,
    text_color: String,
    background_color: String,
    show_grid: bool,
    loading: BTreeSet<String>,
    loaded: BTreeSet<String>,
    is_loading: bool,
    uploading: bool,
    deleting: BTreeSet<String>,
    error: Option<String>,
}

impl FontPreviewer {
    /// Previewer showing `initial` until the library loads
    pub fn new(initial: Vec<FontFile>) -> Self {
        let mut previewer = Self {
            fonts: initial,
            selected: None,
            preview_text: font_preview_text("").to_string(),
            font_size: DEFAULT_FONT_SIZE,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            show_grid: false,
            loading: BTreeSet::new(),
            loaded: BTreeSet::new(),
            is_loading: false,
            uploading: false,
            deleting: BTreeSet::new(),
            error: None,
        };
        if let Some(first) = previewer.fonts.first() {
            previewer.selected = Some(first.id.clone());
            previewer.preview_text = font_preview_text(&first.font_family).to_string();
        }
        previewer
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn fonts(&self) -> &[FontFile] {
        &self.fonts
    }

    pub fn selected(&self) -> Option<&FontFile> {
        let id = self.selected.as_ref()?;
        self.fonts.iter().find(|f| &f.id == id)
    }

    #[inline]
    pub fn preview_text(&self) -> &str {
        &self.preview_text
    }

    #[inline]
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn is_loaded(&self, font_id: &str) -> bool {
        self.loaded.contains(font_id)
    }

    pub fn is_face_loading(&self, font_id: &str) -> bool {
        self.loading.contains(font_id)
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[inline]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // =========================================================================
    // Library
    // =========================================================================

    /// Request the library. `None` while a load is already running.
    pub fn load(&mut self) -> Option<GatewayRequest> {
        if self.is_loading {
            return None;
        }
        self.is_loading = true;
        self.error = None;
        Some(GatewayRequest::LoadFonts)
    }

    /// Load the library and register the initially selected face
    pub fn start(&mut self) -> Vec<ViewAction> {
        let mut actions: Vec<ViewAction> = self.load().map(ViewAction::Request).into_iter().collect();
        if let Some(id) = self.selected.clone() {
            actions.extend(self.select(&id));
        }
        actions
    }

    fn on_fonts_loaded(&mut self, fonts: Vec<FontFile>) -> Vec<ViewAction> {
        self.is_loading = false;
        self.fonts = if fonts.is_empty() {
            debug!("font library empty, using fallback fonts");
            fallback_fonts()
        } else {
            fonts
        };

        let still_present = self.selected().map(|f| f.id.clone());
        match still_present.or_else(|| self.fonts.first().map(|f| f.id.clone())) {
            Some(id) => self.select(&id),
            None => {
                self.selected = None;
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Selection and preview
    // =========================================================================

    /// Select a font, resetting the sample text and registering its face once
    pub fn select(&mut self, font_id: &str) -> Vec<ViewAction> {
        let Some(font) = self.fonts.iter().find(|f| f.id == font_id) else {
            return Vec::new();
        };
        let face = FontFace::from(font);
        self.preview_text = font_preview_text(&face.family).to_string();
        self.selected = Some(font_id.to_string());

        if self.loaded.contains(font_id) || self.loading.contains(font_id) {
            return Vec::new();
        }
        self.loading.insert(font_id.to_string());
        vec![ViewAction::RegisterFont(face)]
    }

    fn on_face_loaded(&mut self, font_id: &str) {
        if self.loading.remove(font_id) {
            self.loaded.insert(font_id.to_string());
        }
    }

    fn on_face_failed(&mut self, font_id: &str) {
        warn!("failed to load font face {}", font_id);
        self.loading.remove(font_id);
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Default sample text, size and colors
    pub fn reset_preview(&mut self) {
        self.preview_text = font_preview_text("").to_string();
        self.font_size = DEFAULT_FONT_SIZE;
        self.text_color = DEFAULT_TEXT_COLOR.to_string();
        self.background_color = DEFAULT_BACKGROUND_COLOR.to_string();
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Validate and request an upload. Invalid files set the error and
    /// never reach the gateway.
    pub fn upload(&mut self, file: UploadFile, cx: &ViewContext) -> Option<GatewayRequest> {
        if !cx.is_admin || self.uploading {
            return None;
        }
        self.error = None;
        if let Err(err) = validate_font_file(&file, cx.font_limits) {
            self.error = Some(err.to_string());
            return None;
        }
        self.uploading = true;
        Some(GatewayRequest::UploadFont {
            metadata: FontMetadata::from_filename(&file.name),
            file,
        })
    }

    fn on_uploaded(&mut self, font: FontFile) -> Vec<ViewAction> {
        self.uploading = false;
        let id = font.id.clone();
        self.fonts.insert(0, font);
        self.select(&id)
    }

    pub fn delete(&mut self, font_id: &str, cx: &ViewContext) -> Option<GatewayRequest> {
        if !cx.is_admin || self.deleting.contains(font_id) {
            return None;
        }
        self.fonts.iter().find(|f| f.id == font_id)?;
        self.deleting.insert(font_id.to_string());
        self.error = None;
        Some(GatewayRequest::DeleteFont {
            font_id: font_id.to_string(),
        })
    }

    fn on_deleted(&mut self, font_id: &str) -> Vec<ViewAction> {
        self.deleting.remove(font_id);
        self.fonts.retain(|f| f.id != font_id);
        self.loading.remove(font_id);
        self.loaded.remove(font_id);

        if self.selected.as_deref() != Some(font_id) {
            return Vec::new();
        }
        match self.fonts.first().map(|f| f.id.clone()) {
            Some(id) => self.select(&id),
            None => {
                self.selected = None;
                Vec::new()
            }
        }
    }

    fn download(&self, font_id: &str) -> Option<ViewAction> {
        let font = self.fonts.iter().find(|f| f.id == font_id)?;
        Some(ViewAction::Download {
            url: font.file_url.clone(),
            filename: font.filename.clone(),
        })
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub fn apply(&mut self, input: FontInput, cx: &ViewContext) -> Vec<ViewAction> {
        match input {
            FontInput::Select { font_id } => return self.select(&font_id),
            FontInput::SetPreviewText { text } => self.preview_text = text,
            FontInput::SetFontSize { size } => self.set_font_size(size),
            FontInput::SetTextColor { color } => self.text_color = color,
            FontInput::SetBackgroundColor { color } => self.background_color = color,
            FontInput::ResetPreview => self.reset_preview(),
            FontInput::ToggleGrid => self.show_grid = !self.show_grid,
            FontInput::Reload => return self.load().map(ViewAction::Request).into_iter().collect(),
            FontInput::Upload { file } => {
                return self.upload(file, cx).map(ViewAction::Request).into_iter().collect()
            }
            FontInput::Delete { font_id } => {
                return self
                    .delete(&font_id, cx)
                    .map(ViewAction::Request)
                    .into_iter()
                    .collect()
            }
            FontInput::Download { font_id } => return self.download(&font_id).into_iter().collect(),
            FontInput::FaceLoaded { font_id } => self.on_face_loaded(&font_id),
            FontInput::FaceFailed { font_id } => self.on_face_failed(&font_id),
            FontInput::DismissError => self.error = None,
            FontInput::Close => return vec![ViewAction::CloseWindow],
        }
        Vec::new()
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Vec<ViewAction>> {
        match key {
            Key::Escape => Some(vec![ViewAction::CloseWindow]),
            _ => None,
        }
    }

    /// Completion of a request issued by this previewer
    pub fn on_complete(&mut self, request: &GatewayRequest, outcome: RequestOutcome) -> Vec<ViewAction> {
        match (request, outcome) {
            (_, RequestOutcome::FontsLoaded { fonts }) => {
                self.on_fonts_loaded(fonts.into_iter().map(FontFile::from).collect())
            }
            (_, RequestOutcome::FontUploaded { font }) => self.on_uploaded(FontFile::from(font)),
            (_, RequestOutcome::FontDeleted { font_id }) => self.on_deleted(&font_id),
            (GatewayRequest::LoadFonts, RequestOutcome::Failed { message }) => {
                warn!("font library load failed: {}", message);
                self.is_loading = false;
                self.error = Some("Failed to load fonts".to_string());
                Vec::new()
            }
            (GatewayRequest::UploadFont { .. }, RequestOutcome::Failed { message }) => {
                self.uploading = false;
                self.error = Some(non_empty_or(message, "Upload failed"));
                Vec::new()
            }
            (GatewayRequest::DeleteFont { font_id }, RequestOutcome::Failed { message }) => {
                self.deleting.remove(font_id);
                self.error = Some(non_empty_or(message, "Delete failed"));
                Vec::new()
            }
            (request, outcome) => {
                debug!("font previewer ignoring {:?} for {:?}", outcome, request);
                Vec::new()
            }
        }
    }

    pub fn render(&self, cx: &ViewContext) -> Value {
        let selected = self.selected();
        json!({
            "header": format!("Fonts ({} fonts)", self.fonts.len()),
            "fonts": self.fonts.iter().map(|f| json!({
                "font": f,
                "size": format_file_size(f.file_size),
                "weightName": font_weight_name(&f.font_weight),
                "selected": Some(&f.id) == self.selected.as_ref(),
                "loaded": self.loaded.contains(&f.id),
                "loading": self.loading.contains(&f.id),
                "deleting": self.deleting.contains(&f.id),
            })).collect::<Vec<_>>(),
            "selected": selected,
            "preview": {
                "text": self.preview_text,
                "fontSize": self.font_size,
                "textColor": self.text_color,
                "backgroundColor": self.background_color,
                "fontFamily": selected.map(|f| f.font_family.as_str()),
                "fontWeight": selected.map(|f| f.font_weight.as_str()),
                "fontStyle": selected.map(|f| f.font_style.as_str()),
                "ready": selected.is_some_and(|f| self.loaded.contains(&f.id)),
            },
            "showGrid": self.show_grid,
            "isLoading": self.is_loading,
            "uploading": self.uploading,
            "canManage": cx.is_admin,
            "error": self.error,
            "emptyMessage": cx.translator.t("fonts.empty"),
            "loadingMessage": cx.translator.t("fonts.loading"),
        })
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
