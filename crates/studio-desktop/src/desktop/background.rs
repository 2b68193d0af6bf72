//! Desktop background value and its CSS rendering

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_GRADIENT;

/// The active background. Exactly one kind applies at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Background {
    /// CSS gradient
    Gradient(String),
    /// Image URL (durable or session-only `blob:` URL)
    Image(String),
}

impl Default for Background {
    fn default() -> Self {
        Background::Gradient(DEFAULT_GRADIENT.to_string())
    }
}

impl Background {
    #[inline]
    pub fn is_image(&self) -> bool {
        matches!(self, Background::Image(_))
    }

    /// Gradient string or image URL
    pub fn value(&self) -> &str {
        match self {
            Background::Gradient(v) | Background::Image(v) => v,
        }
    }

    /// Inline style for the desktop backdrop
    pub fn style(&self) -> BackgroundStyle {
        match self {
            Background::Gradient(gradient) => BackgroundStyle {
                background: Some(gradient.clone()),
                ..Default::default()
            },
            Background::Image(url) => BackgroundStyle {
                background_image: Some(format!("url({})", url)),
                background_size: Some("cover".to_string()),
                background_position: Some("center".to_string()),
                background_repeat: Some("no-repeat".to_string()),
                ..Default::default()
            },
        }
    }
}

/// CSS properties, named as the page's style object expects them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_repeat: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gradient() {
        let bg = Background::default();
        assert!(!bg.is_image());
        assert_eq!(
            serde_json::to_value(&bg).unwrap(),
            serde_json::json!({
                "kind": "gradient",
                "value": "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"
            })
        );
    }

    #[test]
    fn test_image_style() {
        let style = Background::Image("https://cdn/bg.png".into()).style();
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["backgroundImage"], "url(https://cdn/bg.png)");
        assert_eq!(json["backgroundSize"], "cover");
        assert!(json.get("background").is_none());
    }

    #[test]
    fn test_gradient_style() {
        let style = Background::default().style();
        assert_eq!(style.background.as_deref(), Some(DEFAULT_GRADIENT));
        assert!(style.background_image.is_none());
    }
}
