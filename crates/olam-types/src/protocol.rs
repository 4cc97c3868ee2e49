use serde::{Deserialize, Serialize};

use crate::types::{LastSearch, ResultDocument};

/// Messages a UI surface sends to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RelayRequest {
    #[serde(rename_all = "camelCase")]
    SearchWord {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from_lang: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_lang: Option<String>,
    },
    GetLastSearch,
    OpenOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResultDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn ok(document: ResultDocument) -> Self {
        Self {
            success: true,
            data: Some(document),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Relay replies, serialized the way each request expects them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RelayResponse {
    Search(SearchResponse),
    LastSearch(Option<LastSearch>),
    /// No payload (`openOptions`)
    Ack,
}
