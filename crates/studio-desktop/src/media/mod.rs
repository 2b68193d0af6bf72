//! Media viewers embedded in folder views
//!
//! - [`ImageViewer`]: gallery and lightbox with zoom and rotation
//! - [`VideoPlayer`]: playlist-driven player (the page owns the `<video>`)
//! - [`FontPreviewer`]: font list with live preview and admin upload
//!
//! Each viewer is a plain state machine. Side effects it needs from the page
//! come back as [`ViewAction`](crate::views::ViewAction)s.

mod types;
mod format;
mod mock;
mod image_viewer;
mod video_player;
mod font_previewer;

pub use types::{FontFile, ImageFile, Playlist, VideoFile, IMAGES_BUCKET};
pub use format::{
    file_extension, font_preview_text, font_weight_name, format_duration, format_file_size,
    is_supported_font, is_supported_image, is_supported_video,
};
pub use mock::{fallback_fonts, mock_fonts, mock_images, mock_videos};
pub use image_viewer::{ImageInput, ImageMode, ImageViewer, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use video_player::{MediaEffect, VideoInput, VideoPlayer, SEEK_STEP, VOLUME_STEP};
pub use font_previewer::{FontFace, FontInput, FontPreviewer, DEFAULT_FONT_SIZE};
