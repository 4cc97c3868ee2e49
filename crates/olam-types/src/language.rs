use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the dictionary can translate between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Malayalam,
}

impl Language {
    /// Path segment used by the dictionary API
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Malayalam => "malayalam",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Malayalam => "Malayalam",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "malayalam" => Ok(Language::Malayalam),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// Requested source language, `Auto` is resolved from the search text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    #[default]
    Auto,
    English,
    Malayalam,
}

impl SourceLanguage {
    /// The fixed language, or `None` when it still has to be detected
    pub fn fixed(&self) -> Option<Language> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::English => Some(Language::English),
            SourceLanguage::Malayalam => Some(Language::Malayalam),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLanguage::Auto => "auto",
            SourceLanguage::English => "english",
            SourceLanguage::Malayalam => "malayalam",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceLanguage::Auto => "Auto-detect",
            SourceLanguage::English => "English",
            SourceLanguage::Malayalam => "Malayalam",
        }
    }
}

impl From<Language> for SourceLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::English => SourceLanguage::English,
            Language::Malayalam => SourceLanguage::Malayalam,
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceLanguage {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(SourceLanguage::Auto);
        }
        s.parse::<Language>().map(SourceLanguage::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct ParseLanguageError(pub String);
