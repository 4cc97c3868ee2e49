use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{KeyValueStore, Map, StorageError};

/// Process-local store
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<Map>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: Map) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<Map, StorageError> {
        let values = self.values.read().await;
        Ok(keys
            .iter()
            .filter_map(|key| values.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, values: Map) -> Result<(), StorageError> {
        self.values.write().await.extend(values);
        Ok(())
    }
}
