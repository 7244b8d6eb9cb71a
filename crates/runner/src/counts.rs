//! Viewer-count dashboard
//!
//! One parameterized watcher per known game endpoint, replacing the
//! browser dashboard's copy-pasted per-game socket handling. Each session
//! reconnects on its own; the dashboard just prints whatever counts arrive.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use tabletop_client::{FileStorageProvider, GameSession, SessionConfig, SessionEvent};
use tabletop_protocol::game_endpoint;

/// Games the device hosts.
const GAMES: &[&str] = &["dots-and-boxes", "battleship"];

pub async fn run(server: &str) -> anyhow::Result<()> {
    let storage = Arc::new(FileStorageProvider::new());
    let (tx, mut rx) = mpsc::unbounded_channel::<(&'static str, u32)>();

    let mut handles = Vec::new();
    for &game in GAMES {
        let endpoint = game_endpoint(server, game)?;
        let (handle, mut events) = GameSession::spawn(SessionConfig::new(endpoint), storage.clone());
        handles.push(handle);

        let tx = tx.clone();
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                if let SessionEvent::CountUpdated { viewers, .. } = event {
                    let _ = tx.send((game, viewers));
                }
            }
        });
    }
    drop(tx);

    println!("Watching viewer counts (ctrl-c to quit)");
    let mut counts: BTreeMap<&str, u32> = GAMES.iter().map(|&g| (g, 0)).collect();

    loop {
        tokio::select! {
            update = rx.recv() => {
                let Some((game, viewers)) = update else { break };
                counts.insert(game, viewers);
                let line: Vec<String> = counts
                    .iter()
                    .map(|(game, count)| format!("{game}: {count}"))
                    .collect();
                println!("{}", line.join(" | "));
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    for handle in &handles {
        handle.stop();
    }
    Ok(())
}
