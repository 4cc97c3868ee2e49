mod cache;
mod file;
mod memory;
mod preferences;

pub use cache::SearchCache;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use preferences::PreferenceStore;

pub type Map = serde_json::Map<String, serde_json::Value>;

/// Asynchronous get/set key-value storage shared by every surface
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Values for the requested keys, absent keys are left out
    async fn get(&self, keys: &[&str]) -> Result<Map, StorageError>;

    /// Merge `values` into the store, last writer wins
    async fn set(&self, values: Map) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
