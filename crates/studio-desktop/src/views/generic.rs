//! Window opened by an admin-added icon

use serde_json::{json, Value};

use super::ViewContext;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericView {
    label: String,
    glyph: String,
}

impl GenericView {
    pub fn new(label: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            glyph: glyph.into(),
        }
    }

    pub fn render(&self, cx: &ViewContext) -> Value {
        json!({
            "label": self.label,
            "glyph": self.glyph,
            "message": cx.translator.t("common.comingSoon"),
        })
    }
}
