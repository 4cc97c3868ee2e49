use std::ops::RangeInclusive;

use olam_types::{Language, SourceLanguage};

/// Malayalam Unicode block
const MALAYALAM_BLOCK: RangeInclusive<char> = '\u{0D00}'..='\u{0D7F}';

/// Text language detection
pub trait LanguageDetector: Send + Sync {
    /// Total over all strings, never fails
    fn detect(&self, text: &str) -> Language;
}

/// Malayalam if any code point falls in the Malayalam block, English otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeRangeDetector;

impl LanguageDetector for UnicodeRangeDetector {
    fn detect(&self, text: &str) -> Language {
        if text.chars().any(|c| MALAYALAM_BLOCK.contains(&c)) {
            Language::Malayalam
        } else {
            Language::English
        }
    }
}

pub fn detect(text: &str) -> Language {
    UnicodeRangeDetector.detect(text)
}

/// Resolve `auto` against the text being searched
pub fn resolve_source(source: SourceLanguage, text: &str) -> Language {
    source.fixed().unwrap_or_else(|| detect(text))
}
