use std::sync::Arc;

use clap::Parser;
use olam_config::Config;
use olam_core::Trigger;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod controller;
mod events;
mod io;
mod relay;
mod render;
mod state;
mod surface;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::AppController;
use self::events::{SurfaceCommand, SurfaceEvent};
use self::state::AppState;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = Config::new();
    if let Some(surface) = args.surface {
        config.ui.surface = surface;
    }
    let relay_capacity = config.relay_capacity;

    let state = Arc::new(AppState::new(config)?);

    // Command line flags apply to this session only
    let mut settings = state.preferences.load().await;
    if let Some(from) = args.from {
        settings.from_language = from;
    }
    if let Some(limit) = args.limit {
        settings.result_limit = limit;
    }
    tracing::info!(?settings, "loaded settings");

    let controller = AppController::new(state, relay_capacity);
    let mut tasks = controller.spawn_tasks(settings, args.once).await;
    let surface_tx = controller.surface_sender();

    let first = match args.word {
        Some(word) => SurfaceCommand::Search {
            text: word,
            trigger: Trigger::Popup,
        },
        None => SurfaceCommand::RestoreLast,
    };
    surface_tx.send(SurfaceEvent::Command(first)).await?;

    if !args.once {
        io::spawn_stdin_reader(surface_tx)?;
    }

    controller.wait_for_exit().await;

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task exited: {e}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    Ok(())
}
