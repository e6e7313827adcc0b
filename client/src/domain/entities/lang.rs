//! Language parameter
//!
//! Selects which translated content variant the server returns. Metadata is
//! language-independent, so only content requests really depend on it.

use serde::{Deserialize, Serialize};

/// Languages the blog ships translations for, with their display names
pub const KNOWN_LANGUAGES: [(&str, &str); 4] = [
    ("en", "English"),
    ("hi", "Hindi"),
    ("es", "Spanish"),
    ("fr", "French"),
];

const DEFAULT_CODE: &str = "en";

/// A two-letter lowercase language code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Lang(String);

impl Lang {
    /// Read the `lang` query value, falling back to English when absent or malformed
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Human-readable name; unknown codes show as English
    pub fn display_name(&self) -> &'static str {
        KNOWN_LANGUAGES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
            .unwrap_or("English")
    }

    pub fn is_known(&self) -> bool {
        KNOWN_LANGUAGES.iter().any(|(code, _)| *code == self.0)
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self(DEFAULT_CODE.to_string())
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase()) {
            Ok(Lang(code))
        } else {
            Err(format!("Invalid language code: {}", s))
        }
    }
}

impl TryFrom<String> for Lang {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Lang> for String {
    fn from(lang: Lang) -> Self {
        lang.0
    }
}
