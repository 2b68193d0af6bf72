//! Window management module
//!
//! Provides window lifecycle, focus and render order, plus the frame view
//! model drawn around each window's content.

mod kind;
mod instance;
mod manager;
mod frame;

pub use kind::WindowKind;
pub use instance::WindowInstance;
pub use manager::{Opened, WindowManager};
pub use frame::WindowFrame;

/// Unique window identifier for the session
pub type WindowId = u64;
