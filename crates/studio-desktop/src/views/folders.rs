//! Folder list / folder detail state shared by the folder-based views

use serde_json::{json, Value};

use crate::i18n::Translator;

/// A fixed folder in a folder-based view.
pub trait Folder: Copy + Eq + 'static {
    /// Every folder, in display order
    const ALL: &'static [Self];

    /// Stable id used by the page
    fn id(self) -> &'static str;

    /// Translation key of the display name
    fn name_key(self) -> &'static str;

    fn glyph(self) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.id() == id)
    }

    fn name(self, t: &Translator) -> String {
        t.t(self.name_key()).to_string()
    }
}

/// Either the folder list or one open folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FolderBrowser<F: Folder> {
    open: Option<F>,
}

impl<F: Folder> Default for FolderBrowser<F> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<F: Folder> FolderBrowser<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a folder by id; unknown ids leave the state unchanged
    pub fn open(&mut self, id: &str) -> Option<F> {
        let folder = F::from_id(id)?;
        self.open = Some(folder);
        Some(folder)
    }

    /// Return to the folder list
    pub fn back(&mut self) {
        self.open = None;
    }

    #[inline]
    pub fn current(&self) -> Option<F> {
        self.open
    }

    /// Folder tiles for the list state
    pub fn render_list(&self, t: &Translator) -> Value {
        json!(F::ALL
            .iter()
            .map(|f| json!({
                "id": f.id(),
                "name": f.name(t),
                "glyph": f.glyph(),
            }))
            .collect::<Vec<_>>())
    }

    /// "`<window title> - <folder>`" while a folder is open
    pub fn title(&self, window_title: &str, t: &Translator) -> Option<String> {
        self.open
            .map(|f| format!("{} - {}", window_title, f.name(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Shelf {
        Top,
        Bottom,
    }

    impl Folder for Shelf {
        const ALL: &'static [Self] = &[Shelf::Top, Shelf::Bottom];

        fn id(self) -> &'static str {
            match self {
                Shelf::Top => "top",
                Shelf::Bottom => "bottom",
            }
        }

        fn name_key(self) -> &'static str {
            match self {
                Shelf::Top => "folders.videos",
                Shelf::Bottom => "folders.photos",
            }
        }

        fn glyph(self) -> &'static str {
            "📁"
        }
    }

    #[test]
    fn test_open_and_back() {
        let t = Translator::new(Language::En);
        let mut browser = FolderBrowser::<Shelf>::new();
        assert_eq!(browser.title("Portfolio", &t), None);

        assert_eq!(browser.open("bottom"), Some(Shelf::Bottom));
        assert_eq!(browser.title("Portfolio", &t).as_deref(), Some("Portfolio - Photos"));

        assert_eq!(browser.open("nope"), None);
        assert_eq!(browser.current(), Some(Shelf::Bottom));

        browser.back();
        assert_eq!(browser.current(), None);
    }

    #[test]
    fn test_render_list() {
        let t = Translator::new(Language::En);
        let list = FolderBrowser::<Shelf>::new().render_list(&t);
        assert_eq!(list[0]["id"], "top");
        assert_eq!(list[0]["name"], "Videos");
        assert_eq!(list.as_array().unwrap().len(), 2);
    }
}
