//! Connection state machine
//!
//! The session task and its handle live on different call stacks, so the
//! current state is kept in an atomic and decoded on read. There is no
//! terminal failure state: the reconnect policy retries forever, so the
//! machine only ever cycles through these four states.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Connection state for the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected and not trying (before spawn / after stop)
    Disconnected,
    /// Attempting to establish a connection
    Connecting,
    /// Successfully connected
    Connected,
    /// Connection lost, waiting out the backoff delay
    Reconnecting,
}

impl ConnectionState {
    /// Convert to u8 for atomic storage.
    pub fn to_u8(self) -> u8 {
        match self {
            ConnectionState::Disconnected => 0,
            ConnectionState::Connecting => 1,
            ConnectionState::Connected => 2,
            ConnectionState::Reconnecting => 3,
        }
    }

    /// Convert from u8 (atomic storage).
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => ConnectionState::Connecting,
            2 => ConnectionState::Connected,
            3 => ConnectionState::Reconnecting,
            _ => ConnectionState::Disconnected,
        }
    }

    pub fn is_connected(self) -> bool {
        self == ConnectionState::Connected
    }
}

/// Shared, atomically updated connection state.
#[derive(Clone, Default)]
pub struct SharedConnectionState {
    inner: Arc<AtomicU8>,
}

impl SharedConnectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> ConnectionState {
        ConnectionState::from_u8(self.inner.load(Ordering::SeqCst))
    }

    pub fn set(&self, state: ConnectionState) {
        self.inner.store(state.to_u8(), Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_round_trip() {
        for state in [
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Connected,
            ConnectionState::Reconnecting,
        ] {
            assert_eq!(ConnectionState::from_u8(state.to_u8()), state);
        }
    }

    #[test]
    fn test_shared_state_updates_are_visible_to_clones() {
        let shared = SharedConnectionState::new();
        let observer = shared.clone();
        assert_eq!(observer.get(), ConnectionState::Disconnected);

        shared.set(ConnectionState::Connected);
        assert!(observer.get().is_connected());
    }
}
