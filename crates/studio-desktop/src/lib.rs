//! Desktop core for the Studio 64 site
//!
//! This crate holds all state and behavior of the browser desktop:
//! - Window management (open, close, focus, move, z-order, single instance)
//! - Drag gestures that commit one delta per gesture
//! - Content views (Portfolio, My Files, Merch, Recycle Bin, Admin)
//! - Media viewers (images, video, fonts)
//! - Desktop icons, background and general settings
//! - English and Georgian translations
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Window kinds, instances, manager and frame view model
//! - [`input`]: Drag surface, shortcut keys and keyboard ownership
//! - [`desktop`]: Icons, background, settings, toolbar and commands
//! - [`views`]: Per-window content views
//! - [`media`]: Image viewer, video player and font previewer
//! - [`requests`]: Gateway requests and their outcomes
//! - [`persistence`]: Browser-local key/value store
//! - [`i18n`]: Translation tables
//!
//! [`DesktopEngine`] owns everything. The page feeds it commands, page
//! events and key presses, executes the gateway requests it queues, and
//! draws the [`DesktopSnapshot`] it produces.
//!
//! ## Example
//!
//! ```rust
//! use studio_desktop::{DesktopCommand, DesktopEngine};
//!
//! let mut engine = DesktopEngine::new();
//! for icon in ["1", "2", "1"] {
//!     engine
//!         .execute(DesktopCommand::ActivateIcon { icon_id: icon.into() })
//!         .unwrap();
//! }
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.windows.len(), 2);
//! assert_eq!(snapshot.windows[1].frame.title, "Portfolio");
//! ```

pub mod math;
pub mod window;
pub mod input;
pub mod desktop;
pub mod views;
pub mod media;
pub mod requests;
pub mod persistence;
pub mod i18n;

mod config;
mod engine;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::{DesktopConfig, BACKGROUND_STORAGE_KEY, DEFAULT_GRADIENT};
pub use engine::{DesktopEngine, DesktopSnapshot, Effect, RenderedWindow};
pub use error::DesktopError;

pub use math::{Rect, Size, Vec2};
pub use window::{Opened, WindowFrame, WindowId, WindowInstance, WindowKind, WindowManager};
pub use input::{ActiveSurface, DragEnd, DragState, DragSurface, InputResult, Key};
pub use desktop::{Background, DesktopCommand, DesktopIcon, DesktopSettings, IconSet, Toolbar};
pub use views::{ContentView, ViewAction, ViewContext, ViewInput};
pub use requests::{GatewayRequest, PendingRequest, RequestId, RequestOutcome};
pub use persistence::{LocalStore, MemoryLocalStore};
pub use i18n::{Language, Translator};
