//! Move admission
//!
//! A move intent leaves this client only while connected, with no recorded
//! winner, on the locally-bound player's turn. Rejection is silent by
//! contract: the front-end disables the affected control instead of raising
//! an error, so the decision is data, not a failure.
//!
//! Coordinates are deliberately not bounds-checked here - the server is the
//! sole authority on move legality, including illegal positions.

use tabletop_protocol::{GameSnapshot, MoveIntent, PlayerSlot};

use crate::connection::ConnectionState;

/// Outcome of gating a move intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDecision {
    /// The intent may be serialized and sent.
    Send,
    /// Not connected; nothing left this client.
    NotConnected,
    /// A winner is already recorded.
    GameOver,
    /// It is not the locally-bound player's turn.
    NotYourTurn,
}

impl MoveDecision {
    pub fn is_send(self) -> bool {
        self == MoveDecision::Send
    }
}

/// Gate a move intent against current connection and game state.
pub fn check_move(
    connection: ConnectionState,
    snapshot: &GameSnapshot,
    local_slot: PlayerSlot,
    intent: &MoveIntent,
) -> MoveDecision {
    if !connection.is_connected() {
        return MoveDecision::NotConnected;
    }
    if snapshot.winner.is_decided() {
        return MoveDecision::GameOver;
    }
    if snapshot.current_player != local_slot || intent.player != local_slot {
        return MoveDecision::NotYourTurn;
    }
    MoveDecision::Send
}
