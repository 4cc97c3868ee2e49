use unicode_normalization::UnicodeNormalization;

/// Selections this long are treated as accidental and ignored
pub const MAX_SELECTION_CHARS: usize = 100;

/// What started a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Text typed into the popup search box
    Popup,
    DoubleClick,
    ContextMenu,
}

impl Trigger {
    pub fn is_page_selection(&self) -> bool {
        matches!(self, Trigger::DoubleClick | Trigger::ContextMenu)
    }
}

pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFC keeps Malayalam vowel signs composed the way the API indexes them
        let text: String = text.nfc().collect();

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Search text for a trigger, `None` when nothing should be searched
    fn prepare(&self, text: &str, trigger: Trigger) -> Option<String> {
        let text = self.process(text);
        if text.is_empty() {
            return None;
        }
        if trigger.is_page_selection() && text.chars().count() >= MAX_SELECTION_CHARS {
            tracing::debug!(chars = text.chars().count(), "selection too long, ignored");
            return None;
        }
        Some(text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
