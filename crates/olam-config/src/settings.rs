use olam_types::{Language, SourceLanguage, WordLimit};
use serde::{Deserialize, Serialize};

/// Keys of the persisted settings schema
pub mod keys {
    pub const DOUBLE_CLICK_ENABLED: &str = "doubleClickEnabled";
    pub const FROM_LANGUAGE: &str = "fromLanguage";
    pub const TO_LANGUAGE: &str = "toLanguage";
    pub const RESULT_LIMIT: &str = "resultLimit";

    pub const ALL: [&str; 4] = [DOUBLE_CLICK_ENABLED, FROM_LANGUAGE, TO_LANGUAGE, RESULT_LIMIT];
}

fn default_double_click_enabled() -> bool {
    true
}

fn default_to_language() -> Language {
    Language::Malayalam
}

/// User preferences shared by every surface
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_double_click_enabled")]
    pub double_click_enabled: bool,
    pub from_language: SourceLanguage,
    /// Only malayalam is served by the backend
    #[serde(default = "default_to_language")]
    pub to_language: Language,
    pub result_limit: WordLimit,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            double_click_enabled: default_double_click_enabled(),
            from_language: SourceLanguage::default(),
            to_language: default_to_language(),
            result_limit: WordLimit::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let settings = Settings::default();
        assert!(settings.double_click_enabled);
        assert_eq!(settings.from_language, SourceLanguage::Auto);
        assert_eq!(settings.to_language, Language::Malayalam);
        assert_eq!(settings.result_limit, WordLimit::Limited(3));
    }

    #[test]
    fn uses_camel_case_keys() {
        let settings: Settings = serde_json::from_str(
            r#"{"doubleClickEnabled": false, "fromLanguage": "english", "resultLimit": "all"}"#,
        )
        .unwrap();
        assert!(!settings.double_click_enabled);
        assert_eq!(settings.from_language, SourceLanguage::English);
        assert_eq!(settings.result_limit, WordLimit::Unbounded);

        let value = serde_json::to_value(&settings).unwrap();
        for key in keys::ALL {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
