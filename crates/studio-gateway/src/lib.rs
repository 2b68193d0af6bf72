//! Gateway to the hosted storage, metadata and auth service
//!
//! The desktop never talks to the hosted backend directly. Everything it
//! needs goes through the request/response traits in this crate:
//!
//! - [`ObjectStorage`]: upload, remove and list binary assets in buckets
//! - [`FontMetadataStore`]: font records (insert, fetch, query, delete)
//! - [`AuthProvider`]: the currently signed-in user
//!
//! On top of those seams sit the two services the desktop uses:
//! [`FontLibrary`] and [`BackgroundLibrary`]. [`MemoryGateway`] implements
//! every trait in memory and backs the test suites.
//!
//! ## Example
//!
//! ```rust
//! use studio_gateway::{FontLibrary, FontMetadata, MemoryGateway, UploadFile};
//!
//! let gateway = MemoryGateway::new();
//! let library = FontLibrary::new(&gateway);
//!
//! let file = UploadFile::new("my-brand.ttf", vec![0u8; 1024]);
//! let font = library
//!     .upload_font(&file, FontMetadata::from_filename(&file.name), None, 1_700_000_000_000)
//!     .unwrap();
//! assert_eq!(font.font_family, "My Brand");
//! ```

mod auth;
mod backgrounds;
mod error;
mod fonts;
mod memory;
mod metadata;
mod storage;

pub use auth::{AdminPolicy, AuthProvider, User, DEFAULT_ADMIN_EMAILS};
pub use backgrounds::{BackgroundImage, BackgroundLibrary, BACKGROUNDS_BUCKET, SUPPORTED_IMAGE_FORMATS};
pub use error::{GatewayError, ValidationError};
pub use fonts::{
    font_family_from_filename, validate_font_file, FontFormat, FontLibrary, FontLimits,
    FontMetadata, FONTS_BUCKET, FONTS_FOLDER, MAX_FONT_BYTES,
};
pub use memory::{MemoryGateway, Operation};
pub use metadata::{FontMetadataStore, FontQuery, FontRecord, NewFontRecord};
pub use storage::{extension, path_from_public_url, ObjectStorage, StorageEntry, StoredObject, UploadFile};

/// Everything the desktop needs from the hosted backend.
///
/// Blanket-implemented for any type providing all three seams.
pub trait Gateway: ObjectStorage + FontMetadataStore + AuthProvider {}

impl<T: ObjectStorage + FontMetadataStore + AuthProvider + ?Sized> Gateway for T {}
