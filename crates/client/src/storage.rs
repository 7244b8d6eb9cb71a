//! Local key-value storage
//!
//! The browser front-end this client descends from keeps its player binding
//! in `localStorage`; the native analogue is a small JSON map in the platform
//! config directory. The trait exists so application code (and tests) never
//! touch the filesystem directly.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;

/// Well-known storage keys.
pub mod storage_keys {
    /// Last-known player slot, stored as `"1"` or `"2"`.
    pub const PLAYER_SLOT: &str = "player";
}

/// Persistent string key-value storage.
///
/// Implementations are infallible at the call site: failures are logged and
/// treated as a missing value, never surfaced to the caller.
pub trait StorageProvider: Send + Sync + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// File-backed storage provider with write-through persistence.
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: `~/.config/tabletop/storage.json`
/// - macOS: `~/Library/Application Support/io.tabletop.client/storage.json`
/// - Windows: `C:\Users\<User>\AppData\Roaming\tabletop\client\storage.json`
#[derive(Clone)]
pub struct FileStorageProvider {
    storage_path: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for FileStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorageProvider {
    /// Create a provider rooted at the platform config directory, loading
    /// any existing data.
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "tabletop", "client") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("tabletop_storage.json")
        };
        Self::at_path(storage_path)
    }

    /// Create a provider rooted at an explicit file path.
    pub fn at_path(storage_path: PathBuf) -> Self {
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk.
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let snapshot = match self.cache.read() {
            Ok(cache) => cache.clone(),
            Err(_) => return,
        };
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.storage_path, json) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize storage: {}", e),
        }
    }
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key.to_string(), value.to_string());
        }
        self.persist();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.cache.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut cache) = self.cache.write() {
            cache.remove(key);
        }
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorageProvider::at_path(dir.path().join("storage.json"));

        storage.save(storage_keys::PLAYER_SLOT, "2");
        assert_eq!(storage.load(storage_keys::PLAYER_SLOT).as_deref(), Some("2"));
    }

    #[test]
    fn test_values_survive_a_fresh_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        FileStorageProvider::at_path(path.clone()).save("player", "2");

        let reloaded = FileStorageProvider::at_path(path);
        assert_eq!(reloaded.load("player").as_deref(), Some("2"));
    }

    #[test]
    fn test_remove_deletes_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorageProvider::at_path(dir.path().join("storage.json"));

        storage.save("player", "1");
        storage.remove("player");
        assert_eq!(storage.load("player"), None);
    }

    #[test]
    fn test_corrupt_storage_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileStorageProvider::at_path(path);
        assert_eq!(storage.load("player"), None);
    }
}
