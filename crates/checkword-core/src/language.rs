//! Supported wordlist languages.
//!
//! Eight BIP39 languages are exposed, in a fixed order that callers can rely
//! on for display. Each maps onto one of the published 2048-word lists
//! shipped by the [`bip39`] crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LanguageError;

/// A wordlist language, identified externally by its snake_case tag.
///
/// # Examples
///
/// ```
/// use checkword_core::Language;
/// let lang: Language = "chinese_simplified".parse().unwrap();
/// assert_eq!(lang, Language::ChineseSimplified);
/// assert_eq!(lang.tag(), "chinese_simplified");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    ChineseSimplified,
    ChineseTraditional,
    French,
    Italian,
    Japanese,
    Korean,
    Spanish,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Spanish,
    ];

    /// The stable external tag for this language.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Spanish => "spanish",
        }
    }

    /// The published 2048-word list for this language.
    pub fn words(&self) -> &'static [&'static str; 2048] {
        self.bip39().word_list()
    }

    fn bip39(&self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Japanese => bip39::Language::Japanese,
            Self::Korean => bip39::Language::Korean,
            Self::Spanish => bip39::Language::Spanish,
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    /// Parse a tag. Surrounding whitespace and ASCII case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag() == tag)
            .ok_or_else(|| LanguageError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Tags of every supported language, in display order.
pub fn supported_languages() -> Vec<&'static str> {
    Language::ALL.iter().map(Language::tag).collect()
}
