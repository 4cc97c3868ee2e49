use std::env;

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    "https://olam.in/api/dictionary".to_string()
}

fn default_dictionary_base() -> String {
    "https://olam.in/dictionary".to_string()
}

/// Dictionary endpoints
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// JSON lookup API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Human readable "view full details" pages
    #[serde(default = "default_dictionary_base")]
    pub dictionary_base: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let api_base = env::var("OLAM_API_BASE").unwrap_or_else(|_| default_api_base());
        let dictionary_base =
            env::var("OLAM_DICTIONARY_BASE").unwrap_or_else(|_| default_dictionary_base());

        Self {
            api_base,
            dictionary_base,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            dictionary_base: default_dictionary_base(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_olam_endpoints() {
        let config: ApiConfig = serde_json::from_str(r#"{"api_base": "http://localhost:9000"}"#).unwrap();
        assert_eq!(config.api_base, "http://localhost:9000");
        assert_eq!(config.dictionary_base, "https://olam.in/dictionary");
    }
}
