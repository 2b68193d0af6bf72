//! Admin panel: desktop icons, background and general settings

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use studio_gateway::{BackgroundImage, UploadFile, BACKGROUNDS_BUCKET};

use crate::desktop::{Background, DesktopCommand, DesktopSettings};
use crate::requests::{GatewayRequest, RequestOutcome};
use super::{ViewAction, ViewContext};

const UPLOAD_FAILED: &str = "Failed to upload image. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Icons,
    Background,
    Settings,
}

/// A general-settings toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingToggle {
    HighlightFocused,
    SingleInstance,
    AutoSave,
}

/// Page events for the admin panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum AdminInput {
    SelectTab { tab: AdminTab },
    SetIconLabel { text: String },
    SetIconGlyph { text: String },
    AddIcon,
    #[serde(rename_all = "camelCase")]
    ToggleIcon { icon_id: String },
    #[serde(rename_all = "camelCase")]
    RemoveIcon { icon_id: String },
    UploadBackground { file: UploadFile },
    SelectUploaded { url: String },
    ApplyBackground,
    RemoveBackground,
    DeleteUploaded { path: String },
    Toggle { setting: SettingToggle },
    SaveSettings,
}

/// Admin panel state. Desktop-wide changes leave as [`DesktopCommand`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminView {
    tab: AdminTab,
    icon_label: String,
    icon_glyph: String,
    /// Image URL staged for "Apply Image"
    draft: Option<String>,
    uploaded: Vec<BackgroundImage>,
    uploading: bool,
    settings: DesktopSettings,
}

impl AdminView {
    pub fn new(settings: DesktopSettings, background: &Background) -> Self {
        let draft = match background {
            Background::Image(url) => Some(url.clone()),
            Background::Gradient(_) => None,
        };
        Self {
            tab: AdminTab::Icons,
            icon_label: String::new(),
            icon_glyph: String::new(),
            draft,
            uploaded: Vec::new(),
            uploading: false,
            settings,
        }
    }

    #[inline]
    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    pub fn uploaded(&self) -> &[BackgroundImage] {
        &self.uploaded
    }

    #[inline]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    #[inline]
    pub fn settings(&self) -> DesktopSettings {
        self.settings
    }

    /// Fetch previously uploaded backgrounds
    pub fn on_open(&mut self) -> Vec<ViewAction> {
        vec![ViewAction::Request(GatewayRequest::ListBackgrounds {
            folder: BACKGROUNDS_BUCKET.to_string(),
        })]
    }

    fn add_icon(&mut self) -> Vec<ViewAction> {
        let label = self.icon_label.trim();
        let glyph = self.icon_glyph.trim();
        if label.is_empty() || glyph.is_empty() {
            return Vec::new();
        }
        let command = DesktopCommand::AddIcon {
            label: label.to_string(),
            glyph: glyph.to_string(),
        };
        self.icon_label.clear();
        self.icon_glyph.clear();
        vec![ViewAction::Desktop(command)]
    }

    fn toggle(&mut self, setting: SettingToggle) -> Vec<ViewAction> {
        match setting {
            SettingToggle::HighlightFocused => {
                self.settings.highlight_focused = !self.settings.highlight_focused
            }
            SettingToggle::SingleInstance => {
                self.settings.single_instance = !self.settings.single_instance
            }
            SettingToggle::AutoSave => self.settings.auto_save = !self.settings.auto_save,
        }
        if self.settings.auto_save {
            self.save()
        } else {
            Vec::new()
        }
    }

    fn save(&self) -> Vec<ViewAction> {
        vec![ViewAction::Desktop(DesktopCommand::ApplySettings {
            settings: self.settings,
        })]
    }

    pub fn handle(&mut self, input: AdminInput) -> Vec<ViewAction> {
        let command = match input {
            AdminInput::SelectTab { tab } => {
                self.tab = tab;
                return Vec::new();
            }
            AdminInput::SetIconLabel { text } => {
                self.icon_label = text;
                return Vec::new();
            }
            AdminInput::SetIconGlyph { text } => {
                self.icon_glyph = text;
                return Vec::new();
            }
            AdminInput::AddIcon => return self.add_icon(),
            AdminInput::ToggleIcon { icon_id } => DesktopCommand::ToggleIcon { icon_id },
            AdminInput::RemoveIcon { icon_id } => DesktopCommand::RemoveIcon { icon_id },
            AdminInput::UploadBackground { file } => {
                if self.uploading {
                    return Vec::new();
                }
                self.uploading = true;
                return vec![ViewAction::Request(GatewayRequest::UploadBackground { file })];
            }
            AdminInput::SelectUploaded { url } => {
                self.draft = Some(url);
                return Vec::new();
            }
            AdminInput::ApplyBackground => match &self.draft {
                Some(url) => DesktopCommand::ApplyBackgroundImage { url: url.clone() },
                None => return Vec::new(),
            },
            AdminInput::RemoveBackground => DesktopCommand::ResetBackground,
            AdminInput::DeleteUploaded { path } => {
                return vec![ViewAction::Request(GatewayRequest::DeleteBackground { path })];
            }
            AdminInput::Toggle { setting } => return self.toggle(setting),
            AdminInput::SaveSettings => return self.save(),
        };
        vec![ViewAction::Desktop(command)]
    }

    pub fn on_complete(&mut self, request: &GatewayRequest, outcome: RequestOutcome) -> Vec<ViewAction> {
        match outcome {
            RequestOutcome::BackgroundUploaded { image } => {
                self.uploading = false;
                self.draft = Some(image.url.clone());
                self.uploaded.push(image);
            }
            RequestOutcome::BackgroundsListed { images } => {
                for image in images {
                    if !self.uploaded.iter().any(|i| i.id == image.id) {
                        self.uploaded.push(image);
                    }
                }
            }
            RequestOutcome::BackgroundDeleted { path } => {
                if let Some(index) = self.uploaded.iter().position(|i| i.id == path) {
                    let removed = self.uploaded.remove(index);
                    if self.draft.as_deref() == Some(removed.url.as_str()) {
                        self.draft = None;
                    }
                }
            }
            RequestOutcome::Failed { message } => match request {
                GatewayRequest::UploadBackground { .. } => {
                    warn!("background upload failed: {}", message);
                    self.uploading = false;
                    return vec![ViewAction::Notice(UPLOAD_FAILED.to_string())];
                }
                GatewayRequest::DeleteBackground { .. } => {
                    return vec![ViewAction::Notice(message)];
                }
                _ => warn!("admin request failed: {}", message),
            },
            other => debug!("admin panel ignoring {:?}", other),
        }
        Vec::new()
    }

    pub fn render(&self, cx: &ViewContext) -> Value {
        let t = cx.translator;
        json!({
            "tab": self.tab,
            "tabs": [
                { "id": AdminTab::Icons, "label": t.t("admin.icons") },
                { "id": AdminTab::Background, "label": t.t("admin.background") },
                { "id": AdminTab::Settings, "label": t.t("admin.settings") },
            ],
            "icons": {
                "all": cx.icons.all(),
                "activeLabel": format!("{} active", cx.icons.active_count()),
                "newLabel": self.icon_label,
                "newGlyph": self.icon_glyph,
                "canAdd": !self.icon_label.trim().is_empty() && !self.icon_glyph.trim().is_empty(),
            },
            "background": {
                "current": cx.background,
                "draft": self.draft,
                "uploaded": self.uploaded,
                "uploading": self.uploading,
                "canApply": self.draft.is_some(),
            },
            "settings": {
                "values": self.settings,
                "labels": {
                    "highlightFocused": t.t("admin.highlightFocused"),
                    "singleInstance": t.t("admin.singleInstance"),
                    "autoSave": t.t("admin.autoSave"),
                },
                "saveLabel": t.t("admin.saveAll"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> AdminView {
        AdminView::new(DesktopSettings::default(), &Background::default())
    }

    fn image(path: &str) -> BackgroundImage {
        BackgroundImage {
            id: path.into(),
            url: format!("https://cdn/{}", path),
            filename: "bg.png".into(),
            created_at: 1,
            user_id: None,
        }
    }

    #[test]
    fn test_add_icon_requires_both_fields() {
        let mut admin = view();
        admin.handle(AdminInput::SetIconLabel { text: "Blog".into() });
        assert!(admin.handle(AdminInput::AddIcon).is_empty());

        admin.handle(AdminInput::SetIconGlyph { text: " ⭐ ".into() });
        assert_eq!(
            admin.handle(AdminInput::AddIcon),
            vec![ViewAction::Desktop(DesktopCommand::AddIcon {
                label: "Blog".into(),
                glyph: "⭐".into()
            })]
        );
        assert!(admin.handle(AdminInput::AddIcon).is_empty());
    }

    #[test]
    fn test_upload_then_apply() {
        let mut admin = view();
        let actions = admin.handle(AdminInput::UploadBackground {
            file: UploadFile::new("bg.png", vec![1]),
        });
        let [ViewAction::Request(request)] = actions.as_slice() else {
            panic!("expected request, got {:?}", actions);
        };
        assert!(admin.is_uploading());
        assert!(admin
            .handle(AdminInput::UploadBackground {
                file: UploadFile::new("again.png", vec![1]),
            })
            .is_empty());

        admin.on_complete(request, RequestOutcome::BackgroundUploaded { image: image("backgrounds/a.png") });
        assert!(!admin.is_uploading());
        assert_eq!(admin.draft(), Some("https://cdn/backgrounds/a.png"));
        assert_eq!(
            admin.handle(AdminInput::ApplyBackground),
            vec![ViewAction::Desktop(DesktopCommand::ApplyBackgroundImage {
                url: "https://cdn/backgrounds/a.png".into()
            })]
        );
    }

    #[test]
    fn test_upload_failure_alerts() {
        let mut admin = view();
        let request = GatewayRequest::UploadBackground {
            file: UploadFile::new("bg.png", vec![1]),
        };
        admin.handle(AdminInput::UploadBackground {
            file: UploadFile::new("bg.png", vec![1]),
        });
        let actions = admin.on_complete(&request, RequestOutcome::Failed { message: "x".into() });
        assert_eq!(actions, vec![ViewAction::Notice(UPLOAD_FAILED.into())]);
        assert!(!admin.is_uploading());
        assert_eq!(admin.draft(), None);
    }

    #[test]
    fn test_delete_uploaded_clears_matching_draft() {
        let mut admin = view();
        let listed = RequestOutcome::BackgroundsListed {
            images: vec![image("backgrounds/a.png"), image("backgrounds/b.png")],
        };
        admin.on_complete(&GatewayRequest::ListBackgrounds { folder: "backgrounds".into() }, listed);
        admin.handle(AdminInput::SelectUploaded { url: "https://cdn/backgrounds/b.png".into() });

        let request = GatewayRequest::DeleteBackground { path: "backgrounds/b.png".into() };
        admin.on_complete(&request, RequestOutcome::BackgroundDeleted { path: "backgrounds/b.png".into() });
        assert_eq!(admin.uploaded().len(), 1);
        assert_eq!(admin.draft(), None);
        assert!(admin.handle(AdminInput::ApplyBackground).is_empty());
    }

    #[test]
    fn test_settings_auto_save() {
        let mut admin = view();
        let actions = admin.handle(AdminInput::Toggle {
            setting: SettingToggle::HighlightFocused,
        });
        assert_eq!(actions.len(), 1);
        assert!(!admin.settings().highlight_focused);

        let actions = admin.handle(AdminInput::Toggle {
            setting: SettingToggle::AutoSave,
        });
        assert!(actions.is_empty());
        let actions = admin.handle(AdminInput::Toggle {
            setting: SettingToggle::SingleInstance,
        });
        assert!(actions.is_empty());

        let expected = DesktopSettings {
            highlight_focused: false,
            single_instance: false,
            auto_save: false,
        };
        assert_eq!(
            admin.handle(AdminInput::SaveSettings),
            vec![ViewAction::Desktop(DesktopCommand::ApplySettings { settings: expected })]
        );
    }

    #[test]
    fn test_draft_starts_from_current_image() {
        let admin = AdminView::new(DesktopSettings::default(), &Background::Image("https://x/bg.jpg".into()));
        assert_eq!(admin.draft(), Some("https://x/bg.jpg"));
        assert_eq!(admin.tab(), AdminTab::Icons);
    }
}
