//! Tabletop Client - game session client for the embedded game server
//!
//! Maintains a live, server-authoritative view of a game over a WebSocket:
//! - `connection`: connection state machine shared between task and handle
//! - `backoff`: indefinite exponential reconnect policy
//! - `transport`: one socket lifetime (frame pump + keep-alive pinger)
//! - `sync`: wholesale snapshot replacement from inbound frames
//! - `gate`: local move admission (connected, no winner, our turn)
//! - `storage` / `identity`: persisted player-slot binding
//! - `session`: the owning object with explicit spawn/stop lifecycle
//!
//! The hard parts of the game (move legality, box claiming, turn arbitration,
//! fan-out) live on the server; this crate is deliberately thin glue around
//! the socket.

pub mod backoff;
pub mod connection;
pub mod event;
pub mod gate;
pub mod identity;
pub mod session;
pub mod storage;
pub mod sync;

mod transport;

pub use backoff::ReconnectPolicy;
pub use connection::ConnectionState;
pub use event::SessionEvent;
pub use gate::{check_move, MoveDecision};
pub use identity::IdentityService;
pub use session::{GameSession, SessionConfig, SessionHandle};
pub use storage::{storage_keys, FileStorageProvider, StorageProvider};
pub use sync::GameView;
