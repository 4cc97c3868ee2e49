use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use olam_config::Settings;
use tokio::signal;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{SurfaceEvent, UiEvent};
use crate::relay::{RelayEnvelope, RelayHandle, relay_loop};
use crate::state::AppState;
use crate::surface::Surface;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub relay: (AsyncSender<RelayEnvelope>, AsyncReceiver<RelayEnvelope>),
    pub surface: (AsyncSender<SurfaceEvent>, AsyncReceiver<SurfaceEvent>),
    pub ui: (AsyncSender<UiEvent>, AsyncReceiver<UiEvent>),
}

impl ChannelSet {
    pub fn new(relay_capacity: usize) -> Self {
        Self {
            relay: kanal::bounded_async(relay_capacity),
            surface: kanal::bounded_async(64), // commands + finished searches
            ui: kanal::bounded_async(128),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, relay_capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(relay_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Where input commands for the surface go
    pub fn surface_sender(&self) -> AsyncSender<SurfaceEvent> {
        self.channels.surface.0.clone()
    }

    /// Resolves on ctrl-c or once a task has closed the session
    pub async fn wait_for_exit(&self) {
        let cancel = self.cancel_token.clone();
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
            }
            _ = cancel.cancelled() => {
                tracing::debug!("session closed");
            }
        }
    }

    pub async fn spawn_tasks(&self, settings: Settings, once: bool) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Relay
        tasks.spawn(relay_loop(
            self.state.clone(),
            self.channels.relay.1.clone(),
            self.channels.ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Surface
        let kind = self.state.config.read().await.ui.surface;
        let surface = Surface::new(
            kind,
            settings,
            RelayHandle::new(self.channels.relay.0.clone()),
            self.state.preferences.clone(),
            self.channels.surface.0.clone(),
            self.channels.ui.0.clone(),
        );
        tasks.spawn(surface.run(
            self.channels.surface.1.clone(),
            self.cancel_token.clone(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.ui.1.clone(),
            self.state.config.clone(),
            once,
            self.cancel_token.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
