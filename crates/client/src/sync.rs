//! State synchronization
//!
//! Every inbound frame is decoded as a [`ServerMessage`] and applied to the
//! local [`GameView`]. A `state` message replaces the snapshot wholesale -
//! there is no merging and no staleness guard; the transport preserves order
//! and the latest message wins. Frames that fail to decode are noise, not
//! errors: they produce no state change and no user-visible message.

use tabletop_protocol::{GameSnapshot, ServerMessage};

use crate::event::SessionEvent;
use crate::identity::IdentityService;

/// Known non-spectator sockets on a game: the two bound player slots.
pub const NON_SPECTATOR_VIEWERS: u32 = 2;

/// The client's disposable copy of remote game state.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    /// Latest snapshot; fully superseded by each `state` message.
    pub snapshot: GameSnapshot,
    /// Total connected sockets last reported by the server.
    pub viewers: u32,
    /// Derived spectator count (`viewers` minus the player slots).
    pub spectators: u32,
}

/// Apply one raw text frame to the view.
///
/// Returns the events the frame produced, in order. Malformed or
/// unrecognized frames return an empty list.
pub fn apply_frame(
    view: &mut GameView,
    identity: &IdentityService,
    text: &str,
) -> Vec<SessionEvent> {
    match serde_json::from_str::<ServerMessage>(text) {
        Ok(message) => apply_message(view, identity, message),
        Err(e) => {
            tracing::debug!("Discarding undecodable frame: {}", e);
            Vec::new()
        }
    }
}

/// Apply one decoded message to the view.
pub fn apply_message(
    view: &mut GameView,
    identity: &IdentityService,
    message: ServerMessage,
) -> Vec<SessionEvent> {
    match message {
        ServerMessage::State { snapshot, count } => {
            view.snapshot = snapshot.clone();
            let mut events = vec![SessionEvent::SnapshotReplaced(snapshot)];
            if let Some(count) = count {
                view.viewers = count;
                view.spectators = count.saturating_sub(NON_SPECTATOR_VIEWERS);
                events.push(SessionEvent::CountUpdated {
                    viewers: view.viewers,
                    spectators: view.spectators,
                });
            }
            events
        }
        ServerMessage::You { player } => {
            identity.bind(player);
            tracing::info!("Server assigned player slot {}", player);
            vec![SessionEvent::IdentityAssigned(player)]
        }
        ServerMessage::Error { reason } => {
            tracing::warn!("Server error: {}", reason);
            vec![SessionEvent::ServerError(reason)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    use tabletop_protocol::{Claim, PlayerSlot, Winner};

    use crate::storage::StorageProvider;

    #[derive(Default)]
    struct MockStorage {
        data: RwLock<HashMap<String, String>>,
    }

    impl StorageProvider for MockStorage {
        fn save(&self, key: &str, value: &str) {
            self.data
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn load(&self, key: &str) -> Option<String> {
            self.data.read().unwrap().get(key).cloned()
        }

        fn remove(&self, key: &str) {
            self.data.write().unwrap().remove(key);
        }
    }

    fn test_identity() -> (Arc<MockStorage>, IdentityService) {
        let storage = Arc::new(MockStorage::default());
        let identity = IdentityService::new(storage.clone());
        (storage, identity)
    }

    fn state_frame(current_player: u8, winner: u8, count: Option<u32>) -> String {
        let count_field = count.map(|c| format!(r#", "count": {c}"#)).unwrap_or_default();
        format!(
            r#"{{
                "type": "state",
                "board": [[[1, 0]]],
                "boxes": [[2]],
                "scores": {{"1": 0, "2": 1}},
                "currentPlayer": {current_player},
                "winner": {winner}
                {count_field}
            }}"#
        )
    }

    #[test]
    fn test_state_frame_replaces_snapshot_wholesale() {
        let (_, identity) = test_identity();
        let mut view = GameView::default();

        // First frame populates the view.
        apply_frame(&mut view, &identity, &state_frame(1, 0, None));
        assert_eq!(view.snapshot.boxes[0][0], Claim::PlayerTwo);

        // Second frame has a completely different (smaller) board; nothing
        // from the first may survive.
        let second = r#"{
            "type": "state",
            "board": [],
            "boxes": [],
            "scores": {"1": 0, "2": 0},
            "currentPlayer": 2
        }"#;
        let events = apply_frame(&mut view, &identity, second);

        assert!(view.snapshot.board.is_empty());
        assert!(view.snapshot.boxes.is_empty());
        assert_eq!(view.snapshot.current_player, PlayerSlot::Two);
        assert_eq!(view.snapshot.winner, Winner::None);
        assert!(matches!(events[0], SessionEvent::SnapshotReplaced(_)));
    }

    #[test]
    fn test_count_derives_spectators_minus_player_slots() {
        let (_, identity) = test_identity();
        let mut view = GameView::default();

        let events = apply_frame(&mut view, &identity, &state_frame(1, 0, Some(5)));

        assert_eq!(view.viewers, 5);
        assert_eq!(view.spectators, 3);
        assert!(events.contains(&SessionEvent::CountUpdated {
            viewers: 5,
            spectators: 3
        }));
    }

    #[test]
    fn test_spectator_count_saturates_at_zero() {
        let (_, identity) = test_identity();
        let mut view = GameView::default();

        apply_frame(&mut view, &identity, &state_frame(1, 0, Some(1)));
        assert_eq!(view.spectators, 0);
    }

    #[test]
    fn test_malformed_frames_change_nothing() {
        let (_, identity) = test_identity();
        let mut view = GameView::default();
        apply_frame(&mut view, &identity, &state_frame(2, 0, Some(4)));
        let before = view.clone();

        for frame in ["not json", "{\"type\": \"state\"}", "[1,2,3]", ""] {
            let events = apply_frame(&mut view, &identity, frame);
            assert!(events.is_empty(), "frame {frame:?} produced events");
        }

        assert_eq!(view.snapshot, before.snapshot);
        assert_eq!(view.viewers, before.viewers);
    }

    #[test]
    fn test_unrecognized_kind_is_ignored() {
        let (_, identity) = test_identity();
        let mut view = GameView::default();

        let events = apply_frame(&mut view, &identity, r#"{"type": "pong", "player": 1}"#);
        assert!(events.is_empty());
    }

    #[test]
    fn test_you_message_updates_and_persists_identity() {
        let (storage, identity) = test_identity();
        let mut view = GameView::default();

        let events = apply_frame(&mut view, &identity, r#"{"type": "you", "player": 2}"#);

        assert_eq!(events, vec![SessionEvent::IdentityAssigned(PlayerSlot::Two)]);
        // A fresh service over the same storage sees the binding.
        let fresh = IdentityService::new(storage);
        assert_eq!(fresh.current(), PlayerSlot::Two);
    }

    #[test]
    fn test_error_message_is_surfaced_verbatim() {
        let (_, identity) = test_identity();
        let mut view = GameView::default();

        let events = apply_frame(
            &mut view,
            &identity,
            r#"{"type": "error", "reason": "slot already taken"}"#,
        );
        assert_eq!(
            events,
            vec![SessionEvent::ServerError("slot already taken".to_string())]
        );
    }
}
