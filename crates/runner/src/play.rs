//! Dots and Boxes terminal front-end
//!
//! Renders each authoritative snapshot as it arrives and turns stdin lines
//! into move intents. Rejected moves print nothing - like the buttons in the
//! browser original, a control that would be disabled just does nothing.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use tabletop_client::{
    FileStorageProvider, GameSession, SessionConfig, SessionEvent, SessionHandle,
};
use tabletop_protocol::{game_endpoint, Orientation, PlayerSlot};

use crate::render;

const GAME_NAME: &str = "dots-and-boxes";

pub async fn run(server: &str) -> anyhow::Result<()> {
    let endpoint = game_endpoint(server, GAME_NAME)?;
    tracing::info!("Joining {GAME_NAME} at {endpoint}");

    let storage = Arc::new(FileStorageProvider::new());
    let (handle, mut events) = GameSession::spawn(SessionConfig::new(endpoint), storage);

    println!("Dots and Boxes - commands: h ROW COL | v ROW COL | join 1|2 | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Some(event) => print_event(&handle, event),
                    None => break,
                }
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !handle_command(&handle, line.trim()) {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    handle.stop();
    Ok(())
}

fn print_event(handle: &SessionHandle, event: SessionEvent) {
    match event {
        SessionEvent::SnapshotReplaced(snapshot) => {
            println!("{}", render::render_board(&snapshot));
            println!(
                "{}",
                render::render_status(&handle.view(), handle.state(), handle.local_slot())
            );
        }
        SessionEvent::StateChanged(state) => println!("[{}]", render::state_label(state)),
        SessionEvent::CountUpdated { viewers, spectators } => {
            println!("viewers: {viewers} ({spectators} spectating)");
        }
        SessionEvent::IdentityAssigned(slot) => println!("you are player {slot}"),
        SessionEvent::ServerError(reason) => println!("server error: {reason}"),
        SessionEvent::SendFailed => println!("could not send move"),
    }
}

/// Returns false when the loop should exit.
fn handle_command(handle: &SessionHandle, line: &str) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => true,
        ["quit"] | ["q"] => false,
        ["join", slot] => {
            match parse_slot(slot) {
                Some(slot) => {
                    handle.request_slot(slot);
                }
                None => println!("usage: join 1|2"),
            }
            true
        }
        [orientation @ ("h" | "v"), row, col] => {
            match (row.parse::<u32>(), col.parse::<u32>()) {
                (Ok(row), Ok(col)) => {
                    let orientation = if *orientation == "h" {
                        Orientation::H
                    } else {
                        Orientation::V
                    };
                    // Rejections are silent by contract; leave a trace for
                    // debugging only.
                    let decision = handle.play_edge(row, col, orientation);
                    tracing::debug!("play_edge({row}, {col}) -> {decision:?}");
                }
                _ => println!("usage: h ROW COL | v ROW COL"),
            }
            true
        }
        _ => {
            println!("commands: h ROW COL | v ROW COL | join 1|2 | quit");
            true
        }
    }
}

fn parse_slot(s: &str) -> Option<PlayerSlot> {
    match s {
        "1" => Some(PlayerSlot::One),
        "2" => Some(PlayerSlot::Two),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot() {
        assert_eq!(parse_slot("1"), Some(PlayerSlot::One));
        assert_eq!(parse_slot("2"), Some(PlayerSlot::Two));
        assert_eq!(parse_slot("3"), None);
        assert_eq!(parse_slot("one"), None);
    }
}
