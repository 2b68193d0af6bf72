//! Portfolio window: six folders, three of them backed by media viewers

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::input::Key;
use crate::media::{
    mock_fonts, mock_images, mock_videos, FontInput, FontPreviewer, ImageInput, ImageViewer,
    VideoInput, VideoPlayer,
};
use crate::requests::{GatewayRequest, RequestOutcome};
use crate::window::WindowKind;
use super::folders::{Folder, FolderBrowser};
use super::{ViewAction, ViewContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortfolioFolder {
    Videos,
    Photos,
    Logos,
    Fonts,
    Brandbooks,
    Clients,
}

impl Folder for PortfolioFolder {
    const ALL: &'static [Self] = &[
        PortfolioFolder::Videos,
        PortfolioFolder::Photos,
        PortfolioFolder::Logos,
        PortfolioFolder::Fonts,
        PortfolioFolder::Brandbooks,
        PortfolioFolder::Clients,
    ];

    fn id(self) -> &'static str {
        match self {
            PortfolioFolder::Videos => "videos",
            PortfolioFolder::Photos => "photos",
            PortfolioFolder::Logos => "logos",
            PortfolioFolder::Fonts => "fonts",
            PortfolioFolder::Brandbooks => "brandbooks",
            PortfolioFolder::Clients => "clients",
        }
    }

    fn name_key(self) -> &'static str {
        match self {
            PortfolioFolder::Videos => "folders.videos",
            PortfolioFolder::Photos => "folders.photos",
            PortfolioFolder::Logos => "folders.logos",
            PortfolioFolder::Fonts => "folders.fonts",
            PortfolioFolder::Brandbooks => "folders.brandbooks",
            PortfolioFolder::Clients => "folders.clients",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            PortfolioFolder::Videos => "🎬",
            PortfolioFolder::Photos => "📸",
            PortfolioFolder::Logos => "🎨",
            PortfolioFolder::Fonts => "🔤",
            PortfolioFolder::Brandbooks => "📚",
            PortfolioFolder::Clients => "👥",
        }
    }
}

/// Page events for the portfolio window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "input", rename_all = "camelCase")]
pub enum PortfolioInput {
    #[serde(rename_all = "camelCase")]
    OpenFolder { folder_id: String },
    Back,
    Video(VideoInput),
    Image(ImageInput),
    Font(FontInput),
}

#[derive(Clone, Debug, PartialEq)]
enum Detail {
    Videos(VideoPlayer),
    Photos(ImageViewer),
    Fonts(FontPreviewer),
    Placeholder,
}

/// Portfolio window state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioView {
    browser: FolderBrowser<PortfolioFolder>,
    detail: Option<Detail>,
}

impl PortfolioView {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current_folder(&self) -> Option<PortfolioFolder> {
        self.browser.current()
    }

    pub fn video_player(&self) -> Option<&VideoPlayer> {
        match &self.detail {
            Some(Detail::Videos(player)) => Some(player),
            _ => None,
        }
    }

    pub fn image_viewer(&self) -> Option<&ImageViewer> {
        match &self.detail {
            Some(Detail::Photos(viewer)) => Some(viewer),
            _ => None,
        }
    }

    pub fn font_previewer(&self) -> Option<&FontPreviewer> {
        match &self.detail {
            Some(Detail::Fonts(previewer)) => Some(previewer),
            _ => None,
        }
    }

    fn open_folder(&mut self, folder_id: &str) -> Vec<ViewAction> {
        let Some(folder) = self.browser.open(folder_id) else {
            debug!("unknown portfolio folder {}", folder_id);
            return Vec::new();
        };

        let mut actions = Vec::new();
        let detail = match folder {
            PortfolioFolder::Videos => Detail::Videos(VideoPlayer::new(mock_videos(), 0)),
            PortfolioFolder::Photos => Detail::Photos(ImageViewer::new(mock_images())),
            PortfolioFolder::Fonts => {
                let mut previewer = FontPreviewer::new(mock_fonts());
                actions = previewer.start();
                Detail::Fonts(previewer)
            }
            _ => Detail::Placeholder,
        };
        self.detail = Some(detail);
        actions
    }

    pub fn handle(&mut self, input: PortfolioInput, cx: &ViewContext) -> Vec<ViewAction> {
        let input = match input {
            PortfolioInput::OpenFolder { folder_id } => return self.open_folder(&folder_id),
            PortfolioInput::Back => {
                self.browser.back();
                self.detail = None;
                return Vec::new();
            }
            other => other,
        };

        match (input, &mut self.detail) {
            (PortfolioInput::Video(input), Some(Detail::Videos(player))) => player.apply(input),
            (PortfolioInput::Image(input), Some(Detail::Photos(viewer))) => viewer.apply(input, cx),
            (PortfolioInput::Font(input), Some(Detail::Fonts(previewer))) => previewer.apply(input, cx),
            (input, _) => {
                debug!("portfolio ignoring {:?}", input);
                Vec::new()
            }
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Vec<ViewAction>> {
        match self.detail.as_mut()? {
            Detail::Videos(player) => player.handle_key(key),
            Detail::Photos(viewer) => viewer.handle_key(key),
            Detail::Fonts(previewer) => previewer.handle_key(key),
            Detail::Placeholder => None,
        }
    }

    pub fn on_complete(&mut self, request: &GatewayRequest, outcome: RequestOutcome) -> Vec<ViewAction> {
        match &mut self.detail {
            Some(Detail::Fonts(previewer)) => previewer.on_complete(request, outcome),
            Some(Detail::Photos(viewer)) => {
                viewer.on_complete(request, outcome);
                Vec::new()
            }
            _ => {
                debug!("portfolio dropping completion of {:?}", request);
                Vec::new()
            }
        }
    }

    pub fn title(&self, cx: &ViewContext) -> Option<String> {
        self.browser
            .title(&WindowKind::Portfolio.title(cx.translator), cx.translator)
    }

    pub fn render(&self, cx: &ViewContext) -> Value {
        let t = cx.translator;
        let detail = match (&self.detail, self.browser.current()) {
            (Some(Detail::Videos(player)), _) => json!({ "kind": "videos", "state": player.render() }),
            (Some(Detail::Photos(viewer)), _) => json!({ "kind": "photos", "state": viewer.render(cx) }),
            (Some(Detail::Fonts(previewer)), _) => json!({ "kind": "fonts", "state": previewer.render(cx) }),
            (Some(Detail::Placeholder), Some(folder)) => json!({
                "kind": "placeholder",
                "glyph": folder.glyph(),
                "message": format!("Content for {} will be implemented next", folder.name(t)),
            }),
            _ => Value::Null,
        };

        json!({
            "folder": self.browser.current().map(Folder::id),
            "folders": self.browser.render_list(t),
            "backLabel": t.t("common.back"),
            "detail": detail,
        })
    }
}
