//! Font library: validated upload, listing and owner-checked delete.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::metadata::{FontQuery, FontRecord, NewFontRecord};
use crate::storage::{extension, path_from_public_url, UploadFile};
use crate::{Gateway, GatewayError, User, ValidationError};

/// Bucket holding font binaries
pub const FONTS_BUCKET: &str = "fonts";

/// Folder (both object prefix and metadata folder id) for fonts
pub const FONTS_FOLDER: &str = "fonts";

/// Default upload ceiling: 10 MiB
pub const MAX_FONT_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted font container formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFormat {
    Ttf,
    Otf,
    Woff,
    Woff2,
}

impl FontFormat {
    /// Every accepted format, in display order
    pub const ALL: [FontFormat; 4] = [
        FontFormat::Ttf,
        FontFormat::Otf,
        FontFormat::Woff,
        FontFormat::Woff2,
    ];

    /// Parse a (case-insensitive) file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ttf" => Some(FontFormat::Ttf),
            "otf" => Some(FontFormat::Otf),
            "woff" => Some(FontFormat::Woff),
            "woff2" => Some(FontFormat::Woff2),
            _ => None,
        }
    }

    /// Extension / stored format string
    pub fn as_str(self) -> &'static str {
        match self {
            FontFormat::Ttf => "ttf",
            FontFormat::Otf => "otf",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
        }
    }

    /// Format hint used when registering a font face
    pub fn css_format(self) -> &'static str {
        match self {
            FontFormat::Ttf => "truetype",
            FontFormat::Otf => "opentype",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
        }
    }
}

/// Upload constraints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontLimits {
    pub max_bytes: u64,
    pub formats: Vec<FontFormat>,
}

impl Default for FontLimits {
    fn default() -> Self {
        Self {
            max_bytes: MAX_FONT_BYTES,
            formats: FontFormat::ALL.to_vec(),
        }
    }
}

impl FontLimits {
    fn supported_list(&self) -> String {
        self.formats
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Descriptive fields supplied alongside an upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetadata {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub font_family: String,
    pub font_weight: String,
    pub font_style: String,
    pub folder_id: String,
}

impl FontMetadata {
    /// Metadata derived from the file name with default weight and style
    pub fn from_filename(filename: &str) -> Self {
        let family = font_family_from_filename(filename);
        Self {
            title: family.clone(),
            description: Some(format!("Uploaded font: {}", filename)),
            font_family: family,
            font_weight: "400".to_string(),
            font_style: "normal".to_string(),
            folder_id: FONTS_FOLDER.to_string(),
        }
    }
}

/// Check a file against `limits`, returning its format.
pub fn validate_font_file(file: &UploadFile, limits: &FontLimits) -> Result<FontFormat, ValidationError> {
    if file.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let format = file
        .extension()
        .and_then(|ext| FontFormat::from_extension(&ext))
        .filter(|f| limits.formats.contains(f))
        .ok_or_else(|| ValidationError::UnsupportedFormat {
            kind: "font".to_string(),
            supported: limits.supported_list(),
        })?;

    if file.size > limits.max_bytes {
        return Err(ValidationError::TooLarge {
            kind: "Font".to_string(),
            size: file.size,
            limit_mb: limits.max_bytes / (1024 * 1024),
        });
    }

    Ok(format)
}

/// Derive a display family from a file name.
///
/// `my-brand_bold.woff2` becomes `My Brand Bold`.
pub fn font_family_from_filename(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _)) if extension(filename).is_some() => stem,
        _ => filename,
    };

    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn object_path(family: &str, user_id: Option<&str>, now_ms: u64, format: FontFormat) -> String {
    let slug = family
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    match user_id {
        Some(user) => format!("{}/{}/{}-{}.{}", FONTS_FOLDER, user, slug, now_ms, format.as_str()),
        None => format!("{}/{}-{}.{}", FONTS_FOLDER, slug, now_ms, format.as_str()),
    }
}

/// Font operations built on a [`Gateway`].
pub struct FontLibrary<'g, G: Gateway + ?Sized> {
    gateway: &'g G,
    limits: FontLimits,
}

impl<'g, G: Gateway + ?Sized> FontLibrary<'g, G> {
    /// Create a library with default limits
    pub fn new(gateway: &'g G) -> Self {
        Self::with_limits(gateway, FontLimits::default())
    }

    /// Create a library with custom limits
    pub fn with_limits(gateway: &'g G, limits: FontLimits) -> Self {
        Self { gateway, limits }
    }

    /// Active limits
    pub fn limits(&self) -> &FontLimits {
        &self.limits
    }

    /// Validate, store the binary, then insert its record.
    ///
    /// If the record insert fails the stored object is removed again.
    pub fn upload_font(
        &self,
        file: &UploadFile,
        metadata: FontMetadata,
        user_id: Option<&str>,
        now_ms: u64,
    ) -> Result<FontRecord, GatewayError> {
        let format = validate_font_file(file, &self.limits)?;
        let path = object_path(&metadata.font_family, user_id, now_ms, format);

        let stored = self
            .gateway
            .upload(FONTS_BUCKET, &path, &file.bytes)
            .map_err(|e| match e {
                GatewayError::Storage(_) => e,
                other => GatewayError::storage(other.to_string()),
            })?;
        debug!("font object stored at {}", stored.path);

        let record = NewFontRecord {
            filename: file.name.clone(),
            title: metadata.title,
            description: metadata.description,
            file_size: file.size,
            file_url: stored.public_url.clone(),
            folder_id: metadata.folder_id,
            format: format.as_str().to_string(),
            font_family: metadata.font_family,
            font_weight: metadata.font_weight,
            font_style: metadata.font_style,
            uploaded_by: user_id.map(str::to_string),
        };

        match self.gateway.insert_font(record, now_ms) {
            Ok(font) => {
                info!("uploaded font {} ({})", font.font_family, font.id);
                Ok(font)
            }
            Err(e) => {
                warn!("font record insert failed, removing {}: {}", stored.path, e);
                if let Err(rm) = self.gateway.remove(FONTS_BUCKET, &[stored.path]) {
                    warn!("cleanup of orphaned font object failed: {}", rm);
                }
                Err(match e {
                    GatewayError::Database(_) => e,
                    other => GatewayError::database(other.to_string()),
                })
            }
        }
    }

    /// Delete a font record and its binary.
    ///
    /// When `requester` is given, only the uploader or a user with the
    /// `admin` role may delete. A failed object removal is logged and the
    /// record is deleted anyway.
    pub fn delete_font(&self, id: &str, requester: Option<&User>) -> Result<(), GatewayError> {
        let font = self.gateway.get_font(id).map_err(|e| match e {
            GatewayError::NotFound(_) => GatewayError::not_found("Font"),
            other => other,
        })?;

        if let Some(user) = requester {
            let owns = font.uploaded_by.as_deref() == Some(user.id.as_str());
            if !owns && user.role() != Some("admin") {
                return Err(GatewayError::PermissionDenied(
                    "You can only delete your own fonts.".to_string(),
                ));
            }
        }

        match path_from_public_url(&font.file_url, FONTS_BUCKET) {
            Some(path) => {
                if let Err(e) = self.gateway.remove(FONTS_BUCKET, &[path]) {
                    warn!("font object removal failed for {}: {}", font.id, e);
                }
            }
            None => warn!("font {} has no storage path in {}", font.id, font.file_url),
        }

        self.gateway.delete_font(id).map_err(|e| match e {
            GatewayError::Database(_) => e,
            other => GatewayError::database(other.to_string()),
        })?;
        info!("deleted font {}", id);
        Ok(())
    }

    /// Every font, newest first
    pub fn all_fonts(&self) -> Result<Vec<FontRecord>, GatewayError> {
        self.gateway.query_fonts(&FontQuery::All)
    }

    /// Fonts in one folder, newest first
    pub fn fonts_in_folder(&self, folder_id: &str) -> Result<Vec<FontRecord>, GatewayError> {
        self.gateway.query_fonts(&FontQuery::Folder(folder_id.to_string()))
    }

    /// Fonts whose title or family contains `text` (case-insensitive)
    pub fn search_fonts(&self, text: &str) -> Result<Vec<FontRecord>, GatewayError> {
        self.gateway.query_fonts(&FontQuery::Search(text.to_string()))
    }
}
