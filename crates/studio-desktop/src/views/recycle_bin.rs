//! Recycle Bin window: a fixed list of joke entries

use serde_json::{json, Value};

// (name, glyph, description)
const ITEMS: [(&str, &str, &str); 12] = [
    ("Empty Trash", "🗑️", "This is where deleted files go"),
    ("Old Document", "📄", "A very old document from 1995"),
    ("Corrupted Image", "🖼️", "This image got corrupted somehow"),
    ("Bad Song", "🎵", "A song that was just terrible"),
    ("Failed Video", "📹", "Video that failed to render"),
    ("Empty Folder", "📁", "A folder with nothing in it"),
    ("Old Backup", "💾", "Backup from Windows 95"),
    ("Broken Game", "🎮", "A game that never worked"),
    ("Spam Email", "📧", "Email from a Nigerian prince"),
    ("Dead Link", "🔗", "A link that leads nowhere"),
    ("Old App", "📱", "An app from the early 2000s"),
    ("Bad Art", "🎨", "Art that was just... bad"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecycleBinView;

impl RecycleBinView {
    pub fn new() -> Self {
        RecycleBinView
    }

    pub fn item_count(&self) -> usize {
        ITEMS.len()
    }

    pub fn render(&self) -> Value {
        json!({
            "items": ITEMS.iter().map(|(name, glyph, description)| json!({
                "name": name,
                "glyph": glyph,
                "description": description,
            })).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items() {
        let view = RecycleBinView::new();
        assert_eq!(view.item_count(), 12);
        let json = view.render();
        assert_eq!(json["items"][8]["description"], "Email from a Nigerian prince");
    }
}
