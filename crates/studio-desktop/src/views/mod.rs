//! Content views rendered inside window frames
//!
//! [`ContentView`] is chosen from the window's [`WindowKind`] when the window
//! is created. Views consume page events ([`ViewInput`]) and keyboard
//! shortcuts, and answer with [`ViewAction`]s the engine carries out.

mod folders;
mod portfolio;
mod my_files;
mod merch;
mod recycle_bin;
mod admin;
mod generic;

pub use folders::{Folder, FolderBrowser};
pub use portfolio::{PortfolioFolder, PortfolioInput, PortfolioView};
pub use my_files::{MyFilesFolder, MyFilesInput, MyFilesView};
pub use merch::{MerchCategory, MerchInput, MerchItem, MerchView, CATALOG};
pub use recycle_bin::RecycleBinView;
pub use admin::{AdminInput, AdminTab, AdminView, SettingToggle};
pub use generic::GenericView;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use studio_gateway::FontLimits;

use crate::desktop::{Background, DesktopCommand, DesktopSettings, IconSet};
use crate::error::DesktopError;
use crate::i18n::Translator;
use crate::input::Key;
use crate::media::{FontFace, MediaEffect};
use crate::requests::{GatewayRequest, RequestOutcome};
use crate::window::WindowKind;

/// Read-only desktop state visible to views.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub is_admin: bool,
    pub translator: &'a Translator,
    pub font_limits: &'a FontLimits,
    pub icons: &'a IconSet,
    pub background: &'a Background,
    pub settings: &'a DesktopSettings,
}

/// Something a view needs done outside itself.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewAction {
    /// Close the window hosting the view
    CloseWindow,
    /// Gateway call; the completion comes back to the same window
    Request(GatewayRequest),
    /// Register a font face with the page
    RegisterFont(FontFace),
    /// Start a browser download
    Download { url: String, filename: String },
    /// Show an alert
    Notice(String),
    /// Drive the page's media element
    Media(MediaEffect),
    /// Change desktop-wide state
    Desktop(DesktopCommand),
}

/// A page event addressed to one window's view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "event", rename_all = "camelCase")]
pub enum ViewInput {
    Portfolio(PortfolioInput),
    MyFiles(MyFilesInput),
    Merch(MerchInput),
    Admin(AdminInput),
}

/// Per-window content, one variant per window kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentView {
    Portfolio(PortfolioView),
    MyFiles(MyFilesView),
    Merch(MerchView),
    RecycleBin(RecycleBinView),
    Admin(AdminView),
    Generic(GenericView),
}

impl ContentView {
    /// View for a freshly created window of `kind`
    pub fn for_kind(kind: &WindowKind, glyph: &str, cx: &ViewContext) -> Self {
        match kind {
            WindowKind::Portfolio => ContentView::Portfolio(PortfolioView::new()),
            WindowKind::MyFiles => ContentView::MyFiles(MyFilesView::new()),
            WindowKind::Merch => ContentView::Merch(MerchView::new()),
            WindowKind::RecycleBin => ContentView::RecycleBin(RecycleBinView::new()),
            WindowKind::Admin => ContentView::Admin(AdminView::new(*cx.settings, cx.background)),
            WindowKind::Generic(label) => ContentView::Generic(GenericView::new(label.clone(), glyph)),
        }
    }

    /// Actions to run once the window is created
    pub fn on_open(&mut self) -> Vec<ViewAction> {
        match self {
            ContentView::Admin(admin) => admin.on_open(),
            _ => Vec::new(),
        }
    }

    /// Apply a page event. Events for another kind of view are rejected.
    pub fn handle(&mut self, input: ViewInput, cx: &ViewContext) -> Result<Vec<ViewAction>, DesktopError> {
        match (self, input) {
            (ContentView::Portfolio(view), ViewInput::Portfolio(input)) => Ok(view.handle(input, cx)),
            (ContentView::MyFiles(view), ViewInput::MyFiles(input)) => Ok(view.handle(input, cx)),
            (ContentView::Merch(view), ViewInput::Merch(input)) => Ok(view.handle(input)),
            (ContentView::Admin(view), ViewInput::Admin(input)) => Ok(view.handle(input)),
            (view, input) => Err(DesktopError::InvalidPayload(format!(
                "{:?} is not an event for the {} view",
                input,
                view.name()
            ))),
        }
    }

    /// Keyboard shortcut. `None` when the view has no use for the key.
    pub fn handle_key(&mut self, key: Key) -> Option<Vec<ViewAction>> {
        match self {
            ContentView::Portfolio(view) => view.handle_key(key),
            ContentView::MyFiles(view) => view.handle_key(key),
            _ => None,
        }
    }

    /// Completion of a request this view issued
    pub fn on_complete(&mut self, request: &GatewayRequest, outcome: RequestOutcome) -> Vec<ViewAction> {
        match self {
            ContentView::Portfolio(view) => view.on_complete(request, outcome),
            ContentView::MyFiles(view) => view.on_complete(request, outcome),
            ContentView::Admin(view) => view.on_complete(request, outcome),
            _ => Vec::new(),
        }
    }

    /// Frame title override while a folder is open
    pub fn title(&self, cx: &ViewContext) -> Option<String> {
        match self {
            ContentView::Portfolio(view) => view.title(cx),
            ContentView::MyFiles(view) => view.title(cx),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContentView::Portfolio(_) => "portfolio",
            ContentView::MyFiles(_) => "myFiles",
            ContentView::Merch(_) => "merch",
            ContentView::RecycleBin(_) => "recycleBin",
            ContentView::Admin(_) => "admin",
            ContentView::Generic(_) => "generic",
        }
    }

    pub fn render(&self, cx: &ViewContext) -> Value {
        let state = match self {
            ContentView::Portfolio(view) => view.render(cx),
            ContentView::MyFiles(view) => view.render(cx),
            ContentView::Merch(view) => view.render(cx),
            ContentView::RecycleBin(view) => view.render(),
            ContentView::Admin(view) => view.render(cx),
            ContentView::Generic(view) => view.render(cx),
        };
        serde_json::json!({ "view": self.name(), "state": state })
    }
}
