//! Font metadata store seam.

use serde::{Deserialize, Serialize};

use crate::GatewayError;

/// A stored font row.
///
/// Field names follow the hosted table's snake_case columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecord {
    pub id: String,
    pub filename: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_size: u64,
    pub file_url: String,
    pub folder_id: String,
    pub format: String,
    pub font_family: String,
    pub font_weight: String,
    pub font_style: String,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    /// Upload time (ms since epoch), assigned by the store
    pub uploaded_at: u64,
}

/// Row to insert; the store assigns `id` and `uploaded_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFontRecord {
    pub filename: String,
    pub title: String,
    pub description: Option<String>,
    pub file_size: u64,
    pub file_url: String,
    pub folder_id: String,
    pub format: String,
    pub font_family: String,
    pub font_weight: String,
    pub font_style: String,
    pub uploaded_by: Option<String>,
}

impl NewFontRecord {
    /// Materialise the row with store-assigned fields
    pub fn into_record(self, id: String, uploaded_at: u64) -> FontRecord {
        FontRecord {
            id,
            filename: self.filename,
            title: self.title,
            description: self.description,
            file_size: self.file_size,
            file_url: self.file_url,
            folder_id: self.folder_id,
            format: self.format,
            font_family: self.font_family,
            font_weight: self.font_weight,
            font_style: self.font_style,
            uploaded_by: self.uploaded_by,
            uploaded_at,
        }
    }
}

/// Which font rows to return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum FontQuery {
    /// Every row
    All,
    /// Rows in one folder
    Folder(String),
    /// Case-insensitive substring match on title or family
    Search(String),
}

impl FontQuery {
    /// Check whether a row satisfies this query
    pub fn matches(&self, record: &FontRecord) -> bool {
        match self {
            FontQuery::All => true,
            FontQuery::Folder(folder) => record.folder_id == *folder,
            FontQuery::Search(text) => {
                let needle = text.to_lowercase();
                record.title.to_lowercase().contains(&needle)
                    || record.font_family.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Relational store holding font metadata.
pub trait FontMetadataStore {
    /// Insert a row and return it as stored.
    fn insert_font(&self, record: NewFontRecord, now_ms: u64) -> Result<FontRecord, GatewayError>;

    /// Fetch a row by id.
    fn get_font(&self, id: &str) -> Result<FontRecord, GatewayError>;

    /// Rows matching `query`, newest upload first.
    fn query_fonts(&self, query: &FontQuery) -> Result<Vec<FontRecord>, GatewayError>;

    /// Delete a row by id.
    fn delete_font(&self, id: &str) -> Result<(), GatewayError>;
}
