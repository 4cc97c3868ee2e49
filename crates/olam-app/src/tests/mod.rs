use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::AsyncReceiver;
use olam_client::{DictionaryClient, HttpResponse, Transport, TransportError, Url};
use olam_config::Config;
use olam_store::MemoryStore;
use tokio::time::timeout;

use crate::state::AppState;


/// Scripted reply for one looked up word
#[derive(Clone)]
struct Reply {
    status: u16,
    body: String,
    delay: Duration,
}

/// Answers by the last path segment of the lookup URL, `{}` for unknown words
#[derive(Default)]
struct ScriptedTransport {
    replies: HashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn new() -> Self {
        Self::default()
    }

    fn word(mut self, word: &str, body: String) -> Self {
        self.replies.insert(
            word.to_string(),
            Reply {
                status: 200,
                body,
                delay: Duration::ZERO,
            },
        );
        self
    }

    fn slow_word(mut self, word: &str, body: String, delay: Duration) -> Self {
        self.replies.insert(
            word.to_string(),
            Reply {
                status: 200,
                body,
                delay,
            },
        );
        self
    }

    fn status(mut self, word: &str, status: u16) -> Self {
        self.replies.insert(
            word.to_string(),
            Reply {
                status,
                body: String::new(),
                delay: Duration::ZERO,
            },
        );
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());

        let word = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();

        let reply = self.replies.get(&word).cloned().unwrap_or(Reply {
            status: 200,
            body: "{}".to_string(),
            delay: Duration::ZERO,
        });

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }

        Ok(HttpResponse {
            status: reply.status,
            body: reply.body,
        })
    }
}

/// API body with one entry per tag, each headed by `word`
fn entries_body(word: &str, tags: &[&str]) -> String {
    let entries: Vec<_> = tags
        .iter()
        .map(|tag| {
            serde_json::json!({
                "content": [word],
                "tags": [tag],
                "relations": [
                    {"content": ["തീരം", "കര", "വക്ക്"], "relation": {"types": ["n"]}}
                ]
            })
        })
        .collect();

    serde_json::json!({
        "data": {
            "query": {"q": word, "from_lang": "english", "to_lang": "malayalam"},
            "entries": entries
        }
    })
    .to_string()
}

fn app_state(transport: Arc<ScriptedTransport>) -> Arc<AppState> {
    let config = Config::default();
    let client = DictionaryClient::with_transport(config.api.clone(), transport);
    Arc::new(AppState::with_parts(
        config,
        client,
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryStore::new()),
    ))
}

async fn recv<T>(rx: &AsyncReceiver<T>) -> T {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}
