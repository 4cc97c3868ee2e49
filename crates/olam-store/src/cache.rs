use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use olam_types::{LastSearch, ResultDocument};
use serde_json::Value;

use crate::{KeyValueStore, Map, StorageError};

const LAST_SEARCH_KEY: &str = "lastSearch";

/// Remembers the most recent successful search
#[derive(Clone)]
pub struct SearchCache {
    store: Arc<dyn KeyValueStore>,
}

impl SearchCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Failures are logged, caching never fails a search
    pub async fn remember(&self, query: &str, result: &ResultDocument) {
        let entry = LastSearch {
            query: query.to_string(),
            result: result.clone(),
            timestamp: now_millis(),
        };

        if let Err(e) = self.write(&entry).await {
            tracing::error!("Cache error: {e}");
        }
    }

    async fn write(&self, entry: &LastSearch) -> Result<(), StorageError> {
        let mut values = Map::new();
        values.insert(LAST_SEARCH_KEY.to_string(), serde_json::to_value(entry)?);
        self.store.set(values).await
    }

    pub async fn last(&self) -> Option<LastSearch> {
        let mut values = match self.store.get(&[LAST_SEARCH_KEY]).await {
            Ok(values) => values,
            Err(e) => {
                tracing::error!("Cache retrieval error: {e}");
                return None;
            }
        };

        match values.remove(LAST_SEARCH_KEY)? {
            Value::Null => None,
            value => serde_json::from_value(value)
                .inspect_err(|e| tracing::error!("Cache retrieval error: {e}"))
                .ok(),
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
