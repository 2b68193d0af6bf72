//! My Files window: team, work process, videos and equipment

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::input::Key;
use crate::media::{mock_images, ImageInput, ImageViewer};
use crate::requests::{GatewayRequest, RequestOutcome};
use crate::window::WindowKind;
use super::folders::{Folder, FolderBrowser};
use super::{ViewAction, ViewContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MyFilesFolder {
    Team,
    WorkProcess,
    MyVideos,
    Equipment,
}

impl Folder for MyFilesFolder {
    const ALL: &'static [Self] = &[
        MyFilesFolder::Team,
        MyFilesFolder::WorkProcess,
        MyFilesFolder::MyVideos,
        MyFilesFolder::Equipment,
    ];

    fn id(self) -> &'static str {
        match self {
            MyFilesFolder::Team => "team",
            MyFilesFolder::WorkProcess => "workProcess",
            MyFilesFolder::MyVideos => "myVideos",
            MyFilesFolder::Equipment => "equipment",
        }
    }

    fn name_key(self) -> &'static str {
        match self {
            MyFilesFolder::Team => "folders.team",
            MyFilesFolder::WorkProcess => "folders.workProcess",
            MyFilesFolder::MyVideos => "folders.myVideos",
            MyFilesFolder::Equipment => "folders.equipment",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            MyFilesFolder::Team => "👥",
            MyFilesFolder::WorkProcess => "⚙️",
            MyFilesFolder::MyVideos => "🎥",
            MyFilesFolder::Equipment => "📷",
        }
    }
}

// (avatar, name, role, bio)
const TEAM: [(&str, &str, &str, &str); 4] = [
    (
        "👨‍💼",
        "John Doe",
        "Lead Designer",
        "Experienced designer with 8+ years in creative direction and brand development.",
    ),
    (
        "👩‍💻",
        "Jane Smith",
        "Video Editor",
        "Professional video editor specializing in commercial and documentary content.",
    ),
    (
        "👨‍🎨",
        "Mike Johnson",
        "Photographer",
        "Award-winning photographer with expertise in portrait and commercial photography.",
    ),
    (
        "👩‍🔧",
        "Sarah Wilson",
        "Technical Specialist",
        "Technical expert handling equipment maintenance and setup for all projects.",
    ),
];

const PROCESS: [(&str, &str); 5] = [
    (
        "Discovery & Planning",
        "Initial client consultation, project scope definition, and timeline planning.",
    ),
    (
        "Concept Development",
        "Creative brainstorming, concept creation, and initial mockups.",
    ),
    (
        "Production",
        "Active content creation, filming, editing, and design implementation.",
    ),
    (
        "Review & Revision",
        "Client feedback integration, revisions, and final adjustments.",
    ),
    (
        "Delivery",
        "Final file delivery, project documentation, and client handoff.",
    ),
];

// (title, duration, size, description)
const VIDEOS: [(&str, &str, &str, &str); 3] = [
    (
        "Behind the Scenes - Project Alpha",
        "5:23",
        "45MB",
        "Behind the scenes footage from our latest commercial shoot.",
    ),
    (
        "Equipment Setup Tutorial",
        "12:45",
        "120MB",
        "Step-by-step guide for setting up professional lighting and camera equipment.",
    ),
    (
        "Client Interview - Success Story",
        "8:12",
        "78MB",
        "Interview with satisfied client discussing project outcomes and results.",
    ),
];

/// Page events for the My Files window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "input", rename_all = "camelCase")]
pub enum MyFilesInput {
    #[serde(rename_all = "camelCase")]
    OpenFolder { folder_id: String },
    Back,
    Image(ImageInput),
}

/// My Files window state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MyFilesView {
    browser: FolderBrowser<MyFilesFolder>,
    equipment: Option<ImageViewer>,
}

impl MyFilesView {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current_folder(&self) -> Option<MyFilesFolder> {
        self.browser.current()
    }

    pub fn image_viewer(&self) -> Option<&ImageViewer> {
        self.equipment.as_ref()
    }

    pub fn handle(&mut self, input: MyFilesInput, cx: &ViewContext) -> Vec<ViewAction> {
        match input {
            MyFilesInput::OpenFolder { folder_id } => {
                if let Some(folder) = self.browser.open(&folder_id) {
                    self.equipment = (folder == MyFilesFolder::Equipment)
                        .then(|| ImageViewer::new(mock_images()));
                }
                Vec::new()
            }
            MyFilesInput::Back => {
                self.browser.back();
                self.equipment = None;
                Vec::new()
            }
            MyFilesInput::Image(input) => match self.equipment.as_mut() {
                Some(viewer) => viewer.apply(input, cx),
                None => Vec::new(),
            },
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Vec<ViewAction>> {
        self.equipment.as_mut()?.handle_key(key)
    }

    pub fn on_complete(&mut self, request: &GatewayRequest, outcome: RequestOutcome) -> Vec<ViewAction> {
        match self.equipment.as_mut() {
            Some(viewer) => viewer.on_complete(request, outcome),
            None => debug!("my files dropping completion of {:?}", request),
        }
        Vec::new()
    }

    pub fn title(&self, cx: &ViewContext) -> Option<String> {
        self.browser
            .title(&WindowKind::MyFiles.title(cx.translator), cx.translator)
    }

    fn render_folder(&self, folder: MyFilesFolder, cx: &ViewContext) -> Value {
        match folder {
            MyFilesFolder::Team => json!({
                "kind": "team",
                "members": TEAM.iter().map(|(avatar, name, role, bio)| json!({
                    "avatar": avatar,
                    "name": name,
                    "role": role,
                    "bio": bio,
                })).collect::<Vec<_>>(),
            }),
            MyFilesFolder::WorkProcess => json!({
                "kind": "workProcess",
                "steps": PROCESS.iter().enumerate().map(|(i, (title, detail))| json!({
                    "step": i + 1,
                    "title": title,
                    "detail": detail,
                })).collect::<Vec<_>>(),
            }),
            MyFilesFolder::MyVideos => json!({
                "kind": "myVideos",
                "videos": VIDEOS.iter().map(|(title, duration, size, description)| json!({
                    "title": title,
                    "duration": duration,
                    "size": size,
                    "description": description,
                })).collect::<Vec<_>>(),
            }),
            MyFilesFolder::Equipment => json!({
                "kind": "equipment",
                "state": self.equipment.as_ref().map(|v| v.render(cx)),
            }),
        }
    }

    pub fn render(&self, cx: &ViewContext) -> Value {
        let t = cx.translator;
        json!({
            "folder": self.browser.current().map(Folder::id),
            "folders": self.browser.render_list(t),
            "backLabel": t.t("common.back"),
            "detail": self.browser.current().map(|f| self.render_folder(f, cx)),
        })
    }
}
