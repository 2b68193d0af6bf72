//! Object storage seam.

use serde::{Deserialize, Serialize};

use crate::GatewayError;

/// A file picked by the user, ready to be sent to storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFile {
    /// Original file name including extension
    pub name: String,
    /// File contents
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// Size in bytes (kept separately so the page can describe a file it holds)
    pub size: u64,
}

impl UploadFile {
    /// Create an upload from a name and its contents
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self {
            name: name.into(),
            bytes,
            size,
        }
    }

    /// Describe a file whose bytes stay on the page side
    pub fn described(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            bytes: Vec::new(),
            size,
        }
    }

    /// Lowercased extension of the file name, if any
    pub fn extension(&self) -> Option<String> {
        extension(&self.name)
    }
}

/// Result of a successful upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Path inside the bucket
    pub path: String,
    /// Publicly reachable URL
    pub public_url: String,
}

/// One entry of a bucket listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntry {
    /// File name relative to the listed folder
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Creation time (ms since epoch)
    pub created_at: u64,
}

/// Binary asset storage organised in buckets.
pub trait ObjectStorage {
    /// Upload bytes to `path` inside `bucket`. Never overwrites.
    fn upload(&self, bucket: &str, path: &str, bytes: &[u8]) -> Result<StoredObject, GatewayError>;

    /// Remove every listed path from `bucket`.
    fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), GatewayError>;

    /// List the direct children of `folder` inside `bucket`.
    fn list(&self, bucket: &str, folder: &str) -> Result<Vec<StorageEntry>, GatewayError>;

    /// Public URL for an object path.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

/// Lowercased text after the last `.` of a file name.
pub fn extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() || (stem.is_empty() && !filename[1..].contains('.')) {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Recover the bucket-relative object path from a public URL.
///
/// Public URLs end in `/public/<bucket>/<path>`; anything else yields `None`.
pub fn path_from_public_url(url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/public/{}/", bucket);
    let start = url.find(&marker)? + marker.len();
    let path = url[start..].split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
