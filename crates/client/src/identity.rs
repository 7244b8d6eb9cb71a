//! Local player identity
//!
//! Which player slot this session is bound to, persisted under a fixed key so
//! it survives restarts. Only two things mutate it: a `you` message from the
//! server, and an explicit local rebind - and the latter is itself just a
//! `join` request, so the server stays authoritative.

use std::sync::Arc;

use tabletop_protocol::PlayerSlot;

use crate::storage::{storage_keys, StorageProvider};

/// Service for reading and persisting the local player slot.
#[derive(Clone)]
pub struct IdentityService {
    storage: Arc<dyn StorageProvider>,
}

impl IdentityService {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    /// The currently bound slot.
    ///
    /// An unset or unparseable stored value reads as player 1, matching the
    /// front-end this client descends from.
    pub fn current(&self) -> PlayerSlot {
        match self.storage.load(storage_keys::PLAYER_SLOT).as_deref() {
            Some("2") => PlayerSlot::Two,
            _ => PlayerSlot::One,
        }
    }

    /// Persist a server-assigned slot.
    pub fn bind(&self, slot: PlayerSlot) {
        self.storage.save(storage_keys::PLAYER_SLOT, &slot.to_string());
    }

    /// Forget the stored binding; the next read falls back to player 1.
    pub fn clear(&self) {
        self.storage.remove(storage_keys::PLAYER_SLOT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

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

    #[test]
    fn test_unset_identity_defaults_to_player_one() {
        let identity = IdentityService::new(Arc::new(MockStorage::default()));
        assert_eq!(identity.current(), PlayerSlot::One);
    }

    #[test]
    fn test_bind_persists_under_the_fixed_key() {
        let storage = Arc::new(MockStorage::default());
        let identity = IdentityService::new(storage.clone());

        identity.bind(PlayerSlot::Two);

        assert_eq!(storage.load(storage_keys::PLAYER_SLOT).as_deref(), Some("2"));
        assert_eq!(identity.current(), PlayerSlot::Two);
    }

    #[test]
    fn test_fresh_service_reads_back_the_stored_slot() {
        let storage = Arc::new(MockStorage::default());
        IdentityService::new(storage.clone()).bind(PlayerSlot::Two);

        // Same storage, new service: the "fresh session load" case.
        let fresh = IdentityService::new(storage);
        assert_eq!(fresh.current(), PlayerSlot::Two);
    }

    #[test]
    fn test_garbage_stored_value_reads_as_player_one() {
        let storage = Arc::new(MockStorage::default());
        storage.save(storage_keys::PLAYER_SLOT, "spectator");

        let identity = IdentityService::new(storage);
        assert_eq!(identity.current(), PlayerSlot::One);
    }

    #[test]
    fn test_clear_resets_to_default() {
        let storage = Arc::new(MockStorage::default());
        let identity = IdentityService::new(storage);

        identity.bind(PlayerSlot::Two);
        identity.clear();
        assert_eq!(identity.current(), PlayerSlot::One);
    }
}
