//! Tabletop Runner - composition root binary
//!
//! Wires storage and the session client together and drives one of three
//! terminal front-ends: the Dots and Boxes board (`play`), the offline word
//! game (`wordle`), or the per-game viewer-count dashboard (`counts`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod counts;
mod play;
mod render;
mod wordle_cli;

/// Base server URL; any http/https/ws/wss URL naming the device.
const SERVER_URL_VAR: &str = "TABLETOP_SERVER_URL";
const DEFAULT_SERVER_URL: &str = "ws://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabletop=info,tabletop_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server =
        std::env::var(SERVER_URL_VAR).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    let mode = std::env::args().nth(1).unwrap_or_else(|| "play".to_string());

    tracing::info!("Starting tabletop runner in {mode} mode");

    match mode.as_str() {
        "play" => play::run(&server).await,
        "wordle" => wordle_cli::run(),
        "counts" => counts::run(&server).await,
        other => anyhow::bail!("unknown mode '{other}' (expected play, wordle or counts)"),
    }
}
