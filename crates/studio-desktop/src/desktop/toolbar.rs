//! Toolbar view model

use serde::Serialize;

use crate::i18n::{Language, Translator};

/// One entry of the language selector
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// Logo, menu button, background switcher and language selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolbar {
    pub logo: String,
    pub menu_label: String,
    pub background_label: String,
    pub upload_label: String,
    pub reset_label: String,
    pub language: &'static str,
    pub languages: Vec<LanguageOption>,
    /// The menu opens the admin panel only for administrators
    pub menu_enabled: bool,
}

impl Toolbar {
    pub fn new(t: &Translator, is_admin: bool) -> Self {
        Self {
            logo: t.t("toolbar.logo").to_string(),
            menu_label: t.t("toolbar.menu").to_string(),
            background_label: t.t("toolbar.background").to_string(),
            upload_label: t.t("toolbar.uploadImage").to_string(),
            reset_label: t.t("toolbar.resetBackground").to_string(),
            language: t.language().code(),
            languages: Language::ALL
                .iter()
                .map(|l| LanguageOption {
                    code: l.code(),
                    name: l.native_name(),
                })
                .collect(),
            menu_enabled: is_admin,
        }
    }
}
