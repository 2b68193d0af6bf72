//! Merch window: static catalog with a category filter

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{ViewAction, ViewContext};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchCategory {
    #[default]
    All,
    Clothing,
    Accessories,
}

impl MerchCategory {
    pub const ALL: [MerchCategory; 3] = [
        MerchCategory::All,
        MerchCategory::Clothing,
        MerchCategory::Accessories,
    ];

    fn label_key(self) -> &'static str {
        match self {
            MerchCategory::All => "merch.all",
            MerchCategory::Clothing => "merch.clothing",
            MerchCategory::Accessories => "merch.accessories",
        }
    }

    fn includes(self, item: &MerchItem) -> bool {
        self == MerchCategory::All || self == item.category
    }
}

/// A catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchItem {
    pub id: &'static str,
    pub name: &'static str,
    /// Price in cents
    pub price_cents: u32,
    pub image: &'static str,
    pub description: &'static str,
    pub category: MerchCategory,
}

impl MerchItem {
    /// `$25.00`
    pub fn price_label(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

const fn item(
    id: &'static str,
    name: &'static str,
    price_cents: u32,
    image: &'static str,
    description: &'static str,
    category: MerchCategory,
) -> MerchItem {
    MerchItem {
        id,
        name,
        price_cents,
        image,
        description,
        category,
    }
}

/// The catalog
pub static CATALOG: [MerchItem; 6] = [
    item(
        "1",
        "Studio 64 T-Shirt",
        2500,
        "https://via.placeholder.com/200x200/4F46E5/FFFFFF?text=T-Shirt",
        "Premium cotton t-shirt with Studio 64 logo",
        MerchCategory::Clothing,
    ),
    item(
        "2",
        "Studio 64 Hoodie",
        4500,
        "https://via.placeholder.com/200x200/10B981/FFFFFF?text=Hoodie",
        "Comfortable hoodie perfect for any weather",
        MerchCategory::Clothing,
    ),
    item(
        "3",
        "Studio 64 Mug",
        1200,
        "https://via.placeholder.com/200x200/F59E0B/FFFFFF?text=Mug",
        "Ceramic mug with Studio 64 branding",
        MerchCategory::Accessories,
    ),
    item(
        "4",
        "Studio 64 Stickers Pack",
        800,
        "https://via.placeholder.com/200x200/EF4444/FFFFFF?text=Stickers",
        "Set of 5 high-quality vinyl stickers",
        MerchCategory::Accessories,
    ),
    item(
        "5",
        "Studio 64 Cap",
        1800,
        "https://via.placeholder.com/200x200/8B5CF6/FFFFFF?text=Cap",
        "Adjustable cap with embroidered logo",
        MerchCategory::Accessories,
    ),
    item(
        "6",
        "Studio 64 Notebook",
        1500,
        "https://via.placeholder.com/200x200/06B6D4/FFFFFF?text=Notebook",
        "Premium notebook for creative ideas",
        MerchCategory::Accessories,
    ),
];

/// Page events for the merch window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum MerchInput {
    SelectCategory { category: MerchCategory },
    #[serde(rename_all = "camelCase")]
    Buy { item_id: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MerchView {
    category: MerchCategory,
}

impl MerchView {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn category(&self) -> MerchCategory {
        self.category
    }

    /// Items in the selected category
    pub fn visible(&self) -> impl Iterator<Item = &'static MerchItem> + '_ {
        CATALOG.iter().filter(|i| self.category.includes(i))
    }

    pub fn handle(&mut self, input: MerchInput) -> Vec<ViewAction> {
        match input {
            MerchInput::SelectCategory { category } => {
                self.category = category;
                Vec::new()
            }
            MerchInput::Buy { item_id } => CATALOG
                .iter()
                .find(|i| i.id == item_id)
                .map(|i| {
                    ViewAction::Notice(format!(
                        "Buy functionality for {} will be implemented when the shop is ready!",
                        i.name
                    ))
                })
                .into_iter()
                .collect(),
        }
    }

    pub fn render(&self, cx: &ViewContext) -> Value {
        let t = cx.translator;
        json!({
            "category": self.category,
            "categories": MerchCategory::ALL.iter().map(|c| json!({
                "id": c,
                "label": t.t(c.label_key()),
                "active": *c == self.category,
            })).collect::<Vec<_>>(),
            "items": self.visible().map(|i| json!({
                "item": i,
                "price": i.price_label(),
            })).collect::<Vec<_>>(),
            "buyLabel": t.t("merch.buy"),
            "emptyMessage": t.t("merch.empty"),
        })
    }
}
