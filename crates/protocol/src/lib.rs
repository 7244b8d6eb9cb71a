//! Tabletop Protocol - Types shared with the embedded game server
//!
//! This crate contains the wire-format types exchanged over the WebSocket
//! connection with the game server:
//! - Board vocabulary types (`PlayerSlot`, `Claim`, `Orientation`, ...)
//! - The authoritative `GameSnapshot` broadcast by the server
//! - WebSocket message types (`ClientMessage`, `ServerMessage`, `MoveIntent`)
//! - Endpoint derivation for `/ws/<game>` paths
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, url and thiserror
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Server-defined shapes** - The server owns this schema; the client
//!    consumes it verbatim and never partially merges a snapshot

pub mod endpoint;
pub mod messages;
pub mod types;

pub use endpoint::{game_endpoint, EndpointError};
pub use messages::{ClientMessage, MoveIntent, ServerMessage};
pub use types::{Claim, EdgePair, GameSnapshot, Orientation, PlayerSlot, Scores, Winner};
