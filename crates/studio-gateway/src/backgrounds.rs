//! Background image library.

use log::info;
use serde::{Deserialize, Serialize};

use crate::storage::UploadFile;
use crate::{Gateway, GatewayError, ValidationError};

/// Bucket holding uploaded backgrounds
pub const BACKGROUNDS_BUCKET: &str = "backgrounds";

/// Extensions accepted for background images
pub const SUPPORTED_IMAGE_FORMATS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// An uploaded background.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Object path inside the bucket
    pub id: String,
    pub url: String,
    pub filename: String,
    pub created_at: u64,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Background operations built on a [`Gateway`].
pub struct BackgroundLibrary<'g, G: Gateway + ?Sized> {
    gateway: &'g G,
}

impl<'g, G: Gateway + ?Sized> BackgroundLibrary<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self { gateway }
    }

    /// Store an image and return its durable URL
    pub fn upload(
        &self,
        file: &UploadFile,
        user_id: Option<&str>,
        now_ms: u64,
    ) -> Result<BackgroundImage, GatewayError> {
        let ext = validate_image_file(file)?;
        let path = match user_id {
            Some(user) => format!("{}/{}/background-{}.{}", BACKGROUNDS_BUCKET, user, now_ms, ext),
            None => format!("{}/background-{}.{}", BACKGROUNDS_BUCKET, now_ms, ext),
        };

        let stored = self
            .gateway
            .upload(BACKGROUNDS_BUCKET, &path, &file.bytes)
            .map_err(|e| match e {
                GatewayError::Storage(_) => e,
                other => GatewayError::storage(other.to_string()),
            })?;
        info!("uploaded background {}", stored.path);

        Ok(BackgroundImage {
            id: stored.path,
            url: stored.public_url,
            filename: file.name.clone(),
            created_at: now_ms,
            user_id: user_id.map(str::to_string),
        })
    }

    /// Backgrounds stored directly under `folder`
    pub fn list(&self, folder: &str) -> Result<Vec<BackgroundImage>, GatewayError> {
        let entries = self.gateway.list(BACKGROUNDS_BUCKET, folder)?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                let path = if folder.is_empty() {
                    entry.name.clone()
                } else {
                    format!("{}/{}", folder.trim_end_matches('/'), entry.name)
                };
                BackgroundImage {
                    url: self.gateway.public_url(BACKGROUNDS_BUCKET, &path),
                    id: path,
                    filename: entry.name,
                    created_at: entry.created_at,
                    user_id: None,
                }
            })
            .collect())
    }

    /// Remove a background by its object path
    pub fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.gateway.remove(BACKGROUNDS_BUCKET, &[path.to_string()])?;
        info!("deleted background {}", path);
        Ok(())
    }
}

fn validate_image_file(file: &UploadFile) -> Result<String, ValidationError> {
    if file.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    match file.extension() {
        Some(ext) if SUPPORTED_IMAGE_FORMATS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(ValidationError::UnsupportedFormat {
            kind: "image".to_string(),
            supported: SUPPORTED_IMAGE_FORMATS.join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_validation() {
        assert_eq!(
            validate_image_file(&UploadFile::described("Sunset.PNG", 1)),
            Ok("png".to_string())
        );
        let err = validate_image_file(&UploadFile::described("clip.mp4", 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported image format. Supported formats: jpg, jpeg, png, gif, webp"
        );
        assert_eq!(
            validate_image_file(&UploadFile::described(" ", 1)),
            Err(ValidationError::EmptyName)
        );
    }
}
