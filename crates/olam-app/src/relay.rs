use std::sync::Arc;

use anyhow::{Context, bail};
use kanal::{AsyncReceiver, AsyncSender};
use olam_core::resolve_source;
use olam_types::{
    Language, LastSearch, RelayRequest, RelayResponse, SearchResponse, SourceLanguage,
};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;
use crate::state::AppState;

/// A request plus the slot its response goes to
pub struct RelayEnvelope {
    pub request: RelayRequest,
    pub reply: oneshot::Sender<RelayResponse>,
}

/// Request/response access to the relay for UI surfaces
#[derive(Clone)]
pub struct RelayHandle {
    tx: AsyncSender<RelayEnvelope>,
}

impl RelayHandle {
    pub fn new(tx: AsyncSender<RelayEnvelope>) -> Self {
        Self { tx }
    }

    pub async fn request(&self, request: RelayRequest) -> anyhow::Result<RelayResponse> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(RelayEnvelope { request, reply })
            .await
            .context("Relay is not running")?;
        response.await.context("Relay dropped the request")
    }

    pub async fn search(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> anyhow::Result<SearchResponse> {
        let request = RelayRequest::SearchWord {
            text: text.to_string(),
            from_lang: Some(from.as_str().to_string()),
            to_lang: Some(to.as_str().to_string()),
        };

        match self.request(request).await? {
            RelayResponse::Search(response) => Ok(response),
            other => bail!("Unexpected relay response: {other:?}"),
        }
    }

    pub async fn last_search(&self) -> anyhow::Result<Option<LastSearch>> {
        match self.request(RelayRequest::GetLastSearch).await? {
            RelayResponse::LastSearch(last) => Ok(last),
            other => bail!("Unexpected relay response: {other:?}"),
        }
    }

    pub async fn open_options(&self) -> anyhow::Result<()> {
        self.request(RelayRequest::OpenOptions).await?;
        Ok(())
    }

    /// Send a message in its JSON wire form and get the JSON reply back
    pub async fn request_json(&self, raw: &str) -> anyhow::Result<String> {
        let response = match serde_json::from_str::<RelayRequest>(raw) {
            Ok(request) => self.request(request).await?,
            Err(e) => {
                tracing::warn!("Unknown or malformed relay message: {e}");
                RelayResponse::Search(SearchResponse::failure(format!("Invalid request: {e}")))
            }
        };

        Ok(serde_json::to_string(&response)?)
    }
}

/// Background relay: owns network and storage access for every surface
pub async fn relay_loop(
    state: Arc<AppState>,
    requests: AsyncReceiver<RelayEnvelope>,
    ui_tx: AsyncSender<UiEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[RELAY] waiting for requests");

    loop {
        let envelope = tokio::select! {
            _ = cancel.cancelled() => break,
            envelope = requests.recv() => match envelope {
                Ok(envelope) => envelope,
                Err(_) => break,
            },
        };

        tracing::debug!("[RELAY] request: {:?}", envelope.request);

        // Requests are independent, a slow lookup must not hold up the rest
        let state = state.clone();
        let ui_tx = ui_tx.clone();
        tokio::spawn(async move {
            let response = handle_request(&state, &ui_tx, envelope.request).await;
            if envelope.reply.send(response).is_err() {
                tracing::debug!("[RELAY] requester went away");
            }
        });
    }

    tracing::info!("[RELAY] stopping");
    Ok(())
}

async fn handle_request(
    state: &AppState,
    ui_tx: &AsyncSender<UiEvent>,
    request: RelayRequest,
) -> RelayResponse {
    match request {
        RelayRequest::SearchWord {
            text,
            from_lang,
            to_lang,
        } => RelayResponse::Search(handle_search(state, &text, from_lang, to_lang).await),
        RelayRequest::GetLastSearch => RelayResponse::LastSearch(state.cache.last().await),
        RelayRequest::OpenOptions => {
            let settings = state.preferences.load().await;
            if let Err(e) = ui_tx.send(UiEvent::Options(settings)).await {
                tracing::warn!("[RELAY] could not show options: {e}");
            }
            RelayResponse::Ack
        }
    }
}

async fn handle_search(
    state: &AppState,
    text: &str,
    from_lang: Option<String>,
    to_lang: Option<String>,
) -> SearchResponse {
    let text = text.trim();
    if text.is_empty() {
        return SearchResponse::failure("No text provided");
    }

    let from = match from_lang.as_deref() {
        Some(raw) => raw.parse::<SourceLanguage>().unwrap_or_else(|e| {
            tracing::warn!("{e}, detecting from text");
            SourceLanguage::Auto
        }),
        None => SourceLanguage::Auto,
    };
    let from = resolve_source(from, text);

    // Unknown targets go through as malayalam, the client warns about the rest
    let to = to_lang
        .as_deref()
        .and_then(|raw| raw.parse::<Language>().ok())
        .unwrap_or(Language::Malayalam);

    match state.client.search(text, from, to).await {
        Ok(document) => {
            state.cache.remember(text, &document).await;
            SearchResponse::ok(document)
        }
        Err(e) => SearchResponse::failure(e.to_string()),
    }
}
