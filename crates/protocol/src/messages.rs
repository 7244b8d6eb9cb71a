//! WebSocket message types exchanged with the game server
//!
//! Outbound traffic is a mix of tagged control messages ([`ClientMessage`])
//! and bare move objects ([`MoveIntent`]) - the server's move schema carries
//! no `type` field. Inbound traffic is always tagged by `type`; any frame
//! that fails to decode is treated as noise and dropped by the consumer.

use serde::{Deserialize, Serialize};

use crate::types::{GameSnapshot, Orientation, PlayerSlot};

/// Tagged control messages from client to server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    /// Announce the player slot this session wants to occupy.
    Join { player: PlayerSlot },
    /// Keep-alive. Fire-and-forget; no acknowledgment is expected.
    Ping,
}

/// A single edge selection, sent as a bare JSON object.
///
/// Constructed immediately before send and never retained; coordinates are
/// forwarded without bounds validation - the server alone rejects illegal
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub player: PlayerSlot,
    pub row: u32,
    pub col: u32,
    pub orientation: Orientation,
}

/// Messages from server to client, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// Authoritative state broadcast; replaces any prior local snapshot.
    State {
        #[serde(flatten)]
        snapshot: GameSnapshot,
        /// Total connected sockets on this game, when the server reports it.
        count: Option<u32>,
    },
    /// Binds this session to a player slot.
    You { player: PlayerSlot },
    /// Server-declared application error, surfaced to the user verbatim.
    Error { reason: String },
}
