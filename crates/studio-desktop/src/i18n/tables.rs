//! String tables

use std::sync::OnceLock;

use serde_json::{json, Value};

pub(super) fn en() -> &'static Value {
    static TABLE: OnceLock<Value> = OnceLock::new();
    TABLE.get_or_init(|| {
        json!({
            "toolbar": {
                "logo": "Studio 64",
                "menu": "Menu",
                "language": "Language",
                "background": "Background",
                "uploadImage": "Upload Image",
                "resetBackground": "Reset to Default"
            },
            "desktop": {
                "portfolio": "Portfolio",
                "myFiles": "My Files",
                "merch": "Merch",
                "recycleBin": "Recycle Bin",
                "adminPanel": "Admin Panel"
            },
            "folders": {
                "videos": "Videos",
                "photos": "Photos",
                "logos": "Logos",
                "fonts": "Fonts",
                "brandbooks": "Brandbooks",
                "clients": "Our Clients",
                "team": "Team",
                "workProcess": "Work Process",
                "myVideos": "My Videos",
                "equipment": "Equipment"
            },
            "common": {
                "back": "← Back",
                "close": "Close window",
                "comingSoon": "Content for this folder will be implemented next"
            },
            "merch": {
                "all": "All",
                "clothing": "Clothing",
                "accessories": "Accessories",
                "buy": "Buy",
                "empty": "No items found in this category."
            },
            "admin": {
                "icons": "Desktop Icons",
                "background": "Desktop Background",
                "settings": "General Settings",
                "highlightFocused": "Window Focus Highlight",
                "singleInstance": "Single Instance Windows",
                "autoSave": "Auto-save Settings",
                "saveAll": "Save All Settings",
                "uploadFailed": "Failed to upload image. Please try again."
            },
            "fonts": {
                "defaultPreview": "The quick brown fox jumps over the lazy dog",
                "empty": "No fonts available",
                "loading": "Loading fonts..."
            },
            "images": {
                "empty": "No images available"
            }
        })
    })
}

pub(super) fn ka() -> &'static Value {
    static TABLE: OnceLock<Value> = OnceLock::new();
    TABLE.get_or_init(|| {
        json!({
            "toolbar": {
                "logo": "Studio 64",
                "menu": "მენიუ",
                "language": "ენა",
                "background": "ფონი",
                "uploadImage": "სურათის ატვირთვა",
                "resetBackground": "საწყისზე დაბრუნება"
            },
            "desktop": {
                "portfolio": "პორტფოლიო",
                "myFiles": "ჩემი ფაილები",
                "merch": "მერჩი",
                "recycleBin": "ნაგვის ყუთი",
                "adminPanel": "ადმინ პანელი"
            },
            "folders": {
                "videos": "ვიდეოები",
                "photos": "ფოტოები",
                "logos": "ლოგოები",
                "fonts": "შრიფტები",
                "brandbooks": "ბრენდბუქები",
                "clients": "ჩვენი კლიენტები",
                "team": "გუნდი",
                "workProcess": "სამუშაო პროცესი",
                "myVideos": "ჩემი ვიდეოები",
                "equipment": "აღჭურვილობა"
            },
            "common": {
                "back": "← უკან"
            },
            "merch": {
                "all": "ყველა",
                "clothing": "ტანსაცმელი",
                "accessories": "აქსესუარები",
                "buy": "ყიდვა"
            }
        })
    })
}
