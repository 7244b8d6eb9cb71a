//! Events emitted by the session task
//!
//! Delivered over an unbounded channel to whatever owns the front-end, in the
//! order the underlying socket events arrived.

use tabletop_protocol::{GameSnapshot, PlayerSlot};

use crate::connection::ConnectionState;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Connection lifecycle transition.
    StateChanged(ConnectionState),
    /// A state broadcast wholly replaced the local snapshot.
    SnapshotReplaced(GameSnapshot),
    /// The server reported its socket count on this game.
    CountUpdated {
        /// Total connected sockets as reported by the server.
        viewers: u32,
        /// Viewers beyond the two bound player slots.
        spectators: u32,
    },
    /// The server bound this session to a player slot.
    IdentityAssigned(PlayerSlot),
    /// Server-declared application error, for display verbatim.
    ServerError(String),
    /// A locally accepted move could not be handed to the transport.
    /// Moves are never retried; a stale move might no longer be legal.
    SendFailed,
}
