use kanal::{AsyncReceiver, AsyncSender};
use olam_config::Settings;
use olam_config::ui::SurfaceKind;
use olam_core::{
    Control, DefaultPreprocessor, FilterPolicy, Preprocessor, Presenter, ResultState,
    SearchSequencer, Trigger, detect, resolve_source,
};
use olam_store::PreferenceStore;
use olam_types::{Language, LastSearch, SOURCE_TAG_PREFIX};
use tokio_util::sync::CancellationToken;

use crate::events::{SurfaceCommand, SurfaceEvent, UiEvent};
use crate::io::HELP;
use crate::relay::RelayHandle;

const ERROR_LOADING: &str = "Error loading results";

/// One UI surface (popup or page overlay) and the result session it owns
pub struct Surface {
    kind: SurfaceKind,
    state: ResultState,
    presenter: Presenter,
    sequencer: SearchSequencer,
    settings: Settings,
    relay: RelayHandle,
    preferences: PreferenceStore,
    events_tx: AsyncSender<SurfaceEvent>,
    ui_tx: AsyncSender<UiEvent>,
}

impl Surface {
    pub fn new(
        kind: SurfaceKind,
        settings: Settings,
        relay: RelayHandle,
        preferences: PreferenceStore,
        events_tx: AsyncSender<SurfaceEvent>,
        ui_tx: AsyncSender<UiEvent>,
    ) -> Self {
        let filter_policy = match kind {
            SurfaceKind::Popup => FilterPolicy::Select,
            SurfaceKind::Overlay => FilterPolicy::Toggle,
        };

        Self {
            kind,
            state: ResultState::new(settings.result_limit),
            presenter: Presenter::new(filter_policy),
            sequencer: SearchSequencer::new(),
            settings,
            relay,
            preferences,
            events_tx,
            ui_tx,
        }
    }

    pub fn state(&self) -> &ResultState {
        &self.state
    }

    pub async fn run(
        mut self,
        events: AsyncReceiver<SurfaceEvent>,
        cancel: CancellationToken,
    ) -> anyhow::Result<()> {
        tracing::info!("[SURFACE] {} ready", self.kind);

        loop {
            let event = tokio::select! {
                _ = cancel.cancelled() => break,
                event = events.recv() => match event {
                    Ok(event) => event,
                    Err(_) => break,
                },
            };

            if !self.handle(event).await? {
                cancel.cancel();
                break;
            }
        }

        tracing::info!("[SURFACE] {} stopping", self.kind);
        Ok(())
    }

    /// Returns false once the surface should close
    pub async fn handle(&mut self, event: SurfaceEvent) -> anyhow::Result<bool> {
        match event {
            SurfaceEvent::Command(command) => return self.handle_command(command).await,
            SurfaceEvent::SearchFinished {
                ticket,
                word,
                from,
                to,
                outcome,
            } => {
                if !self.sequencer.is_latest(ticket) {
                    tracing::debug!(ticket = ticket.value(), word = %word, "stale search result dropped");
                    return Ok(true);
                }

                match outcome {
                    Ok(document) => {
                        self.state.set_document(document, word, from, to);
                        self.render().await?;
                    }
                    Err(e) => {
                        tracing::error!("Search for '{word}' failed: {e}");
                        self.ui_tx.send(UiEvent::Error(ERROR_LOADING.to_string())).await?;
                    }
                }
            }
        }

        Ok(true)
    }

    async fn handle_command(&mut self, command: SurfaceCommand) -> anyhow::Result<bool> {
        match command {
            SurfaceCommand::Search { text, trigger } => self.start_search(&text, trigger).await?,
            SurfaceCommand::Next => self.apply(Control::Next).await?,
            SurfaceCommand::Previous => self.apply(Control::Previous).await?,
            SurfaceCommand::SelectSource(tag) => {
                let tag = if tag.starts_with(SOURCE_TAG_PREFIX) {
                    tag
                } else {
                    format!("{SOURCE_TAG_PREFIX}{tag}")
                };
                let target = self
                    .presenter
                    .filter_policy()
                    .target(&tag, self.state.source_filter());
                self.apply(Control::SelectSource(target)).await?;
            }
            SurfaceCommand::ClearSource => self.apply(Control::SelectSource(None)).await?,
            SurfaceCommand::RestoreLast => self.restore_last().await?,
            SurfaceCommand::SetPreference(change) => {
                let settings = self.preferences.update(|s| change.apply(s)).await;
                self.state.set_word_limit(settings.result_limit);
                self.settings = settings;
                self.ui_tx
                    .send(UiEvent::Notice(format!("Saved {change}")))
                    .await?;
                if self.state.document().is_some() {
                    self.render().await?;
                }
            }
            SurfaceCommand::ShowOptions => self.relay.open_options().await?,
            SurfaceCommand::Raw(raw) => {
                let reply = self.relay.request_json(&raw).await?;
                self.ui_tx.send(UiEvent::Notice(reply)).await?;
            }
            SurfaceCommand::Help => {
                self.ui_tx.send(UiEvent::Notice(HELP.to_string())).await?;
            }
            SurfaceCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    async fn start_search(&mut self, text: &str, trigger: Trigger) -> anyhow::Result<()> {
        if trigger == Trigger::DoubleClick && !self.settings.double_click_enabled {
            tracing::debug!("double-click lookups disabled");
            return Ok(());
        }

        let Some(word) = DefaultPreprocessor.prepare(text, trigger) else {
            tracing::debug!(?trigger, "selection ignored");
            // Page selections are ignored silently, the popup answers
            if !trigger.is_page_selection() {
                self.ui_tx
                    .send(UiEvent::Notice("No text provided".to_string()))
                    .await?;
            }
            return Ok(());
        };

        let from = resolve_source(self.settings.from_language, &word);
        let to = self.settings.to_language;
        let ticket = self.sequencer.issue();
        tracing::info!(ticket = ticket.value(), word = %word, %from, %to, ?trigger, "searching");

        self.ui_tx.send(UiEvent::Loading { word: word.clone() }).await?;

        let relay = self.relay.clone();
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = match relay.search(&word, from, to).await {
                Ok(response) if response.success => Ok(response.data.unwrap_or_default()),
                Ok(response) => Err(response.error.unwrap_or_else(|| ERROR_LOADING.to_string())),
                Err(e) => Err(e.to_string()),
            };

            let event = SurfaceEvent::SearchFinished {
                ticket,
                word,
                from,
                to,
                outcome,
            };
            if let Err(e) = events_tx.send(event).await {
                tracing::debug!("surface closed before search finished: {e}");
            }
        });

        Ok(())
    }

    async fn restore_last(&mut self) -> anyhow::Result<()> {
        let Some(LastSearch { query, result, .. }) = self.relay.last_search().await? else {
            self.ui_tx
                .send(UiEvent::Notice("No previous search".to_string()))
                .await?;
            return Ok(());
        };

        let from = result
            .query
            .from_lang
            .parse::<Language>()
            .unwrap_or_else(|_| detect(&query));
        let to = result
            .query
            .to_lang
            .parse::<Language>()
            .unwrap_or(Language::Malayalam);

        // A restore supersedes any search still in flight
        self.sequencer.issue();
        self.state.set_document(result, query, from, to);
        self.render().await
    }

    async fn apply(&mut self, control: Control) -> anyhow::Result<()> {
        if self.state.document().is_none() {
            return Ok(());
        }
        if control.apply(&mut self.state) {
            self.render().await?;
        }
        Ok(())
    }

    async fn render(&self) -> anyhow::Result<()> {
        if let Some(view) = self.presenter.project(&self.state) {
            self.ui_tx
                .send(UiEvent::Render {
                    view,
                    requested_from: self.settings.from_language,
                })
                .await?;
        }
        Ok(())
    }
}
