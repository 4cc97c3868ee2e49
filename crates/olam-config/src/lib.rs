use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::ui::UiConfig;

pub mod api;
pub mod settings;
pub mod ui;

pub use settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,

    /// Directory holding the settings and cache files
    pub data_dir: PathBuf,
    pub timeout_seconds: u64,
    /// Pending relay requests before senders wait
    pub relay_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let data_dir = env::var("OLAM_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".olam"));

        let timeout_seconds = env::var("OLAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        let relay_capacity = env::var("OLAM_RELAY_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            api: ApiConfig::new(),
            ui: UiConfig::new(),

            data_dir,
            timeout_seconds,
            relay_capacity,
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("cache.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            data_dir: PathBuf::from(".olam"),
            timeout_seconds: 30,
            relay_capacity: 64,
        }
    }
}
