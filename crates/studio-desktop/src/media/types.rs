//! Media item types

use serde::{Deserialize, Serialize};
use studio_gateway::{path_from_public_url, FontFormat, FontRecord};

use super::format::format_file_size;

/// Bucket holding gallery images
pub const IMAGES_BUCKET: &str = "images";

/// A playable video.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFile {
    pub id: String,
    pub filename: String,
    pub title: String,
    pub description: String,
    pub file_size: u64,
    /// Seconds
    pub duration: f64,
    pub thumbnail_url: String,
    pub file_url: String,
    pub folder_id: String,
    pub format: String,
    pub width: u32,
    pub height: u32,
}

/// A gallery image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFile {
    pub id: String,
    pub filename: String,
    pub title: String,
    pub description: String,
    pub file_size: u64,
    pub thumbnail_url: String,
    pub file_url: String,
    pub folder_id: String,
    pub format: String,
    pub width: u32,
    pub height: u32,
}

impl ImageFile {
    /// Storage path used when deleting the image
    pub fn storage_path(&self) -> String {
        path_from_public_url(&self.file_url, IMAGES_BUCKET)
            .unwrap_or_else(|| format!("{}/{}", self.folder_id, self.filename))
    }

    pub fn size_label(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// A previewable font.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFile {
    pub id: String,
    pub filename: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_size: u64,
    pub file_url: String,
    pub folder_id: String,
    pub format: String,
    pub font_family: String,
    pub font_weight: String,
    pub font_style: String,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    pub uploaded_at: u64,
}

impl FontFile {
    /// CSS `format()` hint for the font face, if the format is known
    pub fn css_format(&self) -> Option<&'static str> {
        FontFormat::from_extension(&self.format).map(FontFormat::css_format)
    }
}

impl From<FontRecord> for FontFile {
    fn from(r: FontRecord) -> Self {
        Self {
            id: r.id,
            filename: r.filename,
            title: r.title,
            description: r.description,
            file_size: r.file_size,
            file_url: r.file_url,
            folder_id: r.folder_id,
            format: r.format,
            font_family: r.font_family,
            font_weight: r.font_weight,
            font_style: r.font_style,
            uploaded_by: r.uploaded_by,
            uploaded_at: r.uploaded_at,
        }
    }
}

/// Ordered videos plus the current position.
///
/// `current` is always a valid index while the list is non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Playlist {
    items: Vec<VideoFile>,
    current: usize,
}

impl Playlist {
    /// Playlist starting at `start` (clamped into range)
    pub fn new(items: Vec<VideoFile>, start: usize) -> Self {
        let current = start.min(items.len().saturating_sub(1));
        Self { items, current }
    }

    #[inline]
    pub fn items(&self) -> &[VideoFile] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&VideoFile> {
        self.items.get(self.current)
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0 && !self.items.is_empty()
    }

    /// Step forward; false at the last entry
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Step back; false at the first entry
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `index`; false if out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.current = index;
        true
    }
}
