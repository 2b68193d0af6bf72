//! Desktop engine: the single state container for the desktop
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, focus and drag gestures
//! - `commands`: Desktop commands (icons, background, settings, language)
//! - `input`: Keyboard routing to the active surface
//! - `requests`: Gateway request bookkeeping and completion routing
//! - `rendering`: JSON snapshot for the page

/// Builds a [`ViewContext`](crate::views::ViewContext) from disjoint engine
/// fields so `self.views` can be borrowed mutably alongside it.
macro_rules! view_context {
    ($engine:expr) => {
        $crate::views::ViewContext {
            is_admin: $engine.is_admin,
            translator: &$engine.translator,
            font_limits: &$engine.config.font_limits,
            icons: &$engine.icons,
            background: &$engine.background,
            settings: &$engine.settings,
        }
    };
}
pub(crate) use view_context;

mod windows;
mod commands;
mod input;
mod requests;
mod rendering;

pub use rendering::{DesktopSnapshot, RenderedWindow};

use std::collections::HashMap;

use log::{debug, info, warn};
use serde::Serialize;
use studio_gateway::{AdminPolicy, User};

use crate::config::DesktopConfig;
use crate::desktop::{Background, DesktopSettings, IconSet};
use crate::i18n::{Language, Translator};
use crate::input::{ActiveSurface, DragSurface};
use crate::media::{FontFace, MediaEffect};
use crate::persistence::{LocalStore, MemoryLocalStore};
use crate::requests::PendingRequests;
use crate::views::{ContentView, ViewAction};
use crate::window::{WindowId, WindowManager};

/// Side effect the page must carry out.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Register a font face (`FontFace` + `document.fonts.add`) and report
    /// back with `faceLoaded`/`faceFailed`
    #[serde(rename_all = "camelCase")]
    RegisterFont { window_id: WindowId, font: FontFace },
    Download { url: String, filename: String },
    /// Show an alert
    Notice { message: String },
    /// Drive the media element inside `window_id`
    #[serde(rename_all = "camelCase")]
    Media { window_id: WindowId, effect: MediaEffect },
}

/// Desktop engine coordinating all desktop components
///
/// Owns the window list, focus, drag gesture, icon set, background,
/// settings, language, signed-in user and each window's content view.
pub struct DesktopEngine {
    /// Tunables
    pub config: DesktopConfig,
    /// Window manager
    pub windows: WindowManager,
    /// Drag gesture
    pub drag: DragSurface,
    /// Desktop icons
    pub(crate) icons: IconSet,
    /// Active background
    pub(crate) background: Background,
    /// General settings
    pub(crate) settings: DesktopSettings,
    /// Translation provider
    pub(crate) translator: Translator,
    /// Admin rule
    pub(crate) policy: AdminPolicy,
    /// Signed-in user
    pub(crate) user: Option<User>,
    /// Cached admin flag for `user`
    pub(crate) is_admin: bool,
    /// Content view per open window
    pub(crate) views: HashMap<WindowId, ContentView>,
    /// In-flight gateway requests
    pub(crate) pending: PendingRequests,
    /// Keyboard owner
    pub(crate) surface: ActiveSurface,
    /// Browser-local persistence
    pub(crate) local: Box<dyn LocalStore>,
    /// Injected clock (ms since epoch)
    pub(crate) now_ms: u64,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with default config and an in-memory local store
    pub fn new() -> Self {
        Self::with_store(DesktopConfig::default(), Box::new(MemoryLocalStore::new()))
    }

    /// Create an engine and restore the persisted background from `local`
    pub fn with_store(config: DesktopConfig, local: Box<dyn LocalStore>) -> Self {
        let mut windows = WindowManager::with_config(&config);
        let settings = DesktopSettings::default();
        windows.set_single_instance(settings.single_instance);

        let mut engine = Self {
            policy: config.admin_policy(),
            background: Background::Gradient(config.default_gradient.clone()),
            config,
            windows,
            drag: DragSurface::new(),
            icons: IconSet::default(),
            settings,
            translator: Translator::default(),
            user: None,
            is_admin: false,
            views: HashMap::new(),
            pending: PendingRequests::new(),
            surface: ActiveSurface::None,
            local,
            now_ms: 0,
        };
        engine.restore_background();
        engine
    }

    fn restore_background(&mut self) {
        match self.local.get(&self.config.background_storage_key) {
            Ok(Some(url)) if !url.is_empty() => {
                info!("restored background image {}", url);
                self.background = Background::Image(url);
            }
            Ok(_) => {}
            Err(e) => warn!("could not read persisted background: {}", e),
        }
    }

    // =========================================================================
    // Environment
    // =========================================================================

    /// Set the clock used for icon ids and upload paths
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Set the viewport size used when clamping is on
    pub fn resize(&mut self, width: f32, height: f32) {
        self.windows
            .set_bounds(Some(crate::math::Rect::new(0.0, 0.0, width, height)));
    }

    /// Sign a user in (or out with `None`) and recompute the admin flag
    pub fn set_user(&mut self, user: Option<User>) {
        self.is_admin = self.policy.is_admin_opt(user.as_ref());
        debug!(
            "user {:?} signed in, admin={}",
            user.as_ref().map(|u| u.id.as_str()),
            self.is_admin
        );
        self.user = user;
    }

    #[inline]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.translator.language()
    }

    #[inline]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    // =========================================================================
    // State queries
    // =========================================================================

    #[inline]
    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    #[inline]
    pub fn background(&self) -> &Background {
        &self.background
    }

    #[inline]
    pub fn settings(&self) -> DesktopSettings {
        self.settings
    }

    #[inline]
    pub fn active_surface(&self) -> ActiveSurface {
        self.surface
    }

    /// Content view of an open window
    pub fn view(&self, id: WindowId) -> Option<&ContentView> {
        self.views.get(&id)
    }

    /// Browser-local store
    pub fn local_store(&self) -> &dyn LocalStore {
        self.local.as_ref()
    }

    // =========================================================================
    // View actions
    // =========================================================================

    /// Carry out what a view asked for, returning the page-side effects
    pub(crate) fn process_actions(&mut self, window_id: WindowId, actions: Vec<ViewAction>) -> Vec<Effect> {
        let mut effects = Vec::new();
        for action in actions {
            match action {
                ViewAction::CloseWindow => {
                    self.close_window(window_id);
                }
                ViewAction::Request(request) => {
                    self.pending.register(window_id, request);
                }
                ViewAction::RegisterFont(font) => effects.push(Effect::RegisterFont { window_id, font }),
                ViewAction::Download { url, filename } => effects.push(Effect::Download { url, filename }),
                ViewAction::Notice(message) => effects.push(Effect::Notice { message }),
                ViewAction::Media(effect) => effects.push(Effect::Media { window_id, effect }),
                ViewAction::Desktop(command) => {
                    match self.execute(command) {
                        Ok(more) => effects.extend(more),
                        Err(e) => warn!("command from window {} rejected: {}", window_id, e),
                    }
                }
            }
        }
        effects
    }
}
