use std::sync::Arc;

use kanal::AsyncReceiver;
use olam_config::Config;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;
use crate::render::{format_settings, format_view};

/// Terminal front end: prints whatever the surface publishes
pub async fn ui_loop(
    ui_rx: AsyncReceiver<UiEvent>,
    config: Arc<RwLock<Config>>,
    once: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[UI] started");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        let text = {
            let config = config.read().await;
            render_event(&event, &config)
        };
        println!("{text}");

        if once && event.is_final() {
            cancel.cancel();
            break;
        }
    }

    tracing::info!("[UI] stopping");
    Ok(())
}

fn render_event(event: &UiEvent, config: &Config) -> String {
    match event {
        UiEvent::Loading { word } => format!("Searching for \"{word}\"..."),
        UiEvent::Render {
            view,
            requested_from,
        } => format_view(view, *requested_from, &config.api, config.ui.show_details_link),
        UiEvent::Error(message) => message.clone(),
        UiEvent::Options(settings) => format_settings(settings),
        UiEvent::Notice(message) => message.clone(),
    }
}
