use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use olam_client::DictionaryClient;
use olam_config::Config;
use olam_store::{JsonFileStore, KeyValueStore, PreferenceStore, SearchCache};
use tokio::sync::RwLock;

/// Shared handles owned by the relay and handed to surfaces
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub client: DictionaryClient,
    pub preferences: PreferenceStore,
    pub cache: SearchCache,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = DictionaryClient::new(
            config.api.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
        .context("Failed to build HTTP client")?;

        let settings_store = Arc::new(JsonFileStore::new(config.settings_path()));
        let cache_store = Arc::new(JsonFileStore::new(config.cache_path()));
        tracing::info!(dir = %config.data_dir.display(), "using data directory");

        Ok(Self::with_parts(config, client, settings_store, cache_store))
    }

    pub fn with_parts(
        config: Config,
        client: DictionaryClient,
        settings_store: Arc<dyn KeyValueStore>,
        cache_store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            client,
            preferences: PreferenceStore::new(settings_store),
            cache: SearchCache::new(cache_store),
        }
    }
}
