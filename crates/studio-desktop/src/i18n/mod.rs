//! Translation provider
//!
//! Maps a language tag to a nested lookup table addressed with dotted keys
//! such as `desktop.portfolio`.

mod tables;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "KA")]
    Ka,
}

impl Language {
    /// All languages, in selector order
    pub const ALL: [Language; 2] = [Language::En, Language::Ka];

    /// Selector value
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ka => "KA",
        }
    }

    /// Name shown in the selector
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ka => "ქართული",
        }
    }

    /// Parse a selector value (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "EN" => Some(Language::En),
            "KA" => Some(Language::Ka),
            _ => None,
        }
    }

    fn table(self) -> &'static Value {
        match self {
            Language::En => tables::en(),
            Language::Ka => tables::ka(),
        }
    }
}

/// Looks up UI strings in the selected language.
#[derive(Clone, Debug, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translate `key`.
    ///
    /// Falls back to English, then to the key itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.language.table(), key)
            .or_else(|| lookup(Language::En.table(), key))
            .unwrap_or(key)
    }
}

fn lookup(table: &'static Value, key: &str) -> Option<&'static str> {
    key.split('.')
        .try_fold(table, |node, part| node.get(part))
        .and_then(Value::as_str)
}
