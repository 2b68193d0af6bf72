//! Desktop configuration
//!
//! Every field has a default, so a partial JSON document only overrides what
//! it names.

use serde::{Deserialize, Serialize};
use studio_gateway::{AdminPolicy, FontLimits, DEFAULT_ADMIN_EMAILS};

use crate::error::DesktopError;
use crate::math::{Size, Vec2};

/// Gradient shown when no background image is applied
pub const DEFAULT_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

/// Local-storage key holding the applied background image URL
pub const BACKGROUND_STORAGE_KEY: &str = "studio64-background-image";

/// Tunables for the desktop core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Position of the first window
    pub cascade_origin: Vec2,
    /// Offset added per already-open window
    pub cascade_step: f32,
    /// Keep windows inside the viewport when moved (off: freeform placement)
    pub clamp_to_viewport: bool,
    /// Nominal window size used for clamping
    pub window_size: Size,
    /// Default desktop gradient
    pub default_gradient: String,
    /// Local-storage key for the applied background image
    pub background_storage_key: String,
    /// Font upload constraints
    pub font_limits: FontLimits,
    /// Emails treated as administrators
    pub admin_emails: Vec<String>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            cascade_origin: Vec2::new(100.0, 100.0),
            cascade_step: 40.0,
            clamp_to_viewport: false,
            window_size: Size::new(600.0, 400.0),
            default_gradient: DEFAULT_GRADIENT.to_string(),
            background_storage_key: BACKGROUND_STORAGE_KEY.to_string(),
            font_limits: FontLimits::default(),
            admin_emails: DEFAULT_ADMIN_EMAILS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, DesktopError> {
        serde_json::from_str(json).map_err(|e| DesktopError::InvalidConfig(e.to_string()))
    }

    /// Admin rule built from the allow-list
    pub fn admin_policy(&self) -> AdminPolicy {
        AdminPolicy::new(&self.admin_emails)
    }
}
