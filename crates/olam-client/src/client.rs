use std::sync::Arc;
use std::time::Duration;

use olam_config::api::ApiConfig;
use olam_types::{Language, LexicalEntry, Query, ResultDocument};
use serde::Deserialize;

use crate::http::ReqwestTransport;
use crate::urls::api_url;
use crate::{Transport, TransportError};

/// The only target language the backend serves
const SUPPORTED_TARGET: Language = Language::Malayalam;

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    data: Option<ApiData>,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    #[serde(default)]
    entries: Option<Vec<LexicalEntry>>,
    #[serde(default)]
    query: Option<Query>,
}

/// Looks words up through the dictionary API
#[derive(Clone)]
pub struct DictionaryClient {
    transport: Arc<dyn Transport>,
    api: ApiConfig,
}

impl DictionaryClient {
    pub fn new(api: ApiConfig, timeout: Duration) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(timeout)?;
        Ok(Self::with_transport(api, Arc::new(transport)))
    }

    pub fn with_transport(api: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, api }
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// One lookup, no retries. An empty entry list is a valid outcome.
    pub async fn search(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<ResultDocument, TransportError> {
        if text.trim().is_empty() {
            return Err(TransportError::InvalidRequest("No text provided".to_string()));
        }

        let to = if to == SUPPORTED_TARGET {
            to
        } else {
            tracing::warn!(requested = %to, "unsupported target language, using {SUPPORTED_TARGET}");
            SUPPORTED_TARGET
        };

        let url = api_url(&self.api.api_base, from, to, text)?;
        tracing::debug!(%url, "dictionary lookup");

        let response = self.transport.get(&url).await.inspect_err(|e| {
            tracing::error!("Olam API error: {e}");
        })?;

        if !response.is_success() {
            tracing::error!(status = response.status, "Olam API error: non-success status");
            return Err(TransportError::Status {
                status: response.status,
            });
        }

        let envelope: ApiEnvelope = serde_json::from_str(&response.body)
            .map_err(|e| TransportError::Parse(e.to_string()))?;

        let (entries, query) = match envelope.data {
            Some(data) => (data.entries.unwrap_or_default(), data.query),
            None => (Vec::new(), None),
        };
        let query = query.unwrap_or_else(|| Query {
            q: text.to_string(),
            from_lang: from.as_str().to_string(),
            to_lang: to.as_str().to_string(),
        });

        tracing::info!(word = %text, entries = entries.len(), "lookup finished");
        Ok(ResultDocument::new(entries, query))
    }
}
