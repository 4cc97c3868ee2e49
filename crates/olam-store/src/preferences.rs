use std::sync::Arc;

use olam_config::Settings;
use olam_config::settings::keys;
use olam_types::{Language, SourceLanguage, WordLimit};
use serde_json::Value;

use crate::{KeyValueStore, Map, StorageError};

/// Reads and writes user settings, falling back to defaults on any failure
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Never fails: unreadable storage or values yield defaults
    pub async fn load(&self) -> Settings {
        let map = match self.store.get(&keys::ALL).await {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Settings error: {e}, using defaults");
                return Settings::default();
            }
        };

        let settings = Self::from_map(&map);

        // Only malayalam is served, rewrite anything else that was stored
        let stored_target = map.get(keys::TO_LANGUAGE);
        if stored_target != Some(&Value::String(Language::Malayalam.as_str().to_string())) {
            tracing::debug!(stored = ?stored_target, "normalizing stored target language");
            let mut fix = Map::new();
            fix.insert(keys::TO_LANGUAGE.to_string(), Value::from(Language::Malayalam.as_str()));
            if let Err(e) = self.store.set(fix).await {
                tracing::warn!("Settings error: {e}");
            }
        }

        settings
    }

    fn from_map(map: &Map) -> Settings {
        let defaults = Settings::default();

        // Anything but an explicit `false` keeps double-click on
        let double_click_enabled = map
            .get(keys::DOUBLE_CLICK_ENABLED)
            .is_none_or(|value| value != &Value::Bool(false));

        let from_language = match map.get(keys::FROM_LANGUAGE) {
            Some(Value::String(s)) if !s.is_empty() => {
                s.parse::<SourceLanguage>().unwrap_or_else(|e| {
                    tracing::warn!("{e}, using {}", defaults.from_language);
                    defaults.from_language
                })
            }
            _ => defaults.from_language,
        };

        let result_limit = match map.get(keys::RESULT_LIMIT) {
            Some(value) => serde_json::from_value::<WordLimit>(value.clone()).unwrap_or_else(|e| {
                tracing::warn!("Invalid result limit {value}: {e}, using {}", defaults.result_limit);
                defaults.result_limit
            }),
            None => defaults.result_limit,
        };

        Settings {
            double_click_enabled,
            from_language,
            to_language: Language::Malayalam,
            result_limit,
        }
    }

    pub async fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        let settings = Settings {
            to_language: Language::Malayalam,
            ..settings.clone()
        };

        match serde_json::to_value(&settings)? {
            Value::Object(map) => self.store.set(map).await,
            other => Err(StorageError::Unavailable(format!(
                "settings serialized to non-object {other}"
            ))),
        }
    }

    /// Load, modify and persist. Write failures are logged and the
    /// modified settings are still returned for this session.
    pub async fn update<F>(&self, modify: F) -> Settings
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.load().await;
        modify(&mut settings);

        if let Err(e) = self.save(&settings).await {
            tracing::warn!("Settings error: {e}");
        }

        settings
    }
}
