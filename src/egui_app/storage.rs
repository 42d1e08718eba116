/**
 * Durable Client Storage
 *
 * Persists the session (`user` key) and the dark-mode flag (`darkMode`
 * key) to a JSON file in the platform config directory, and rehydrates
 * them on startup. Storage failures are logged and otherwise ignored;
 * losing a saved session only means logging in again.
 */
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shared::auth::AuthUser;

/// Persisted client state. Serialized under the fixed keys `user` and
/// `darkMode`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
    #[serde(default, rename = "darkMode")]
    pub dark_mode: bool,
}

/// File-backed storage handle.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("bookshelf").join("storage.json"),
        }
    }
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage rooted at an explicit path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted state; any failure yields the default.
    pub fn load(&self) -> StoredState {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Corrupt client storage, starting fresh: {}", e);
                StoredState::default()
            }),
            Err(_) => StoredState::default(),
        }
    }

    /// Write the state back to disk.
    pub fn save(&self, state: &StoredState) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create storage directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(state) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    tracing::warn!("Failed to write client storage: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize client storage: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_path(dir.path().join("storage.json"));
        (dir, storage)
    }

    #[test]
    fn missing_file_loads_default() {
        let (_dir, storage) = temp_storage();
        let state = storage.load();
        assert!(state.user.is_none());
        assert!(!state.dark_mode);
    }

    #[test]
    fn session_round_trip() {
        let (_dir, storage) = temp_storage();
        let user = AuthUser {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            token: "tok".to_string(),
        };

        storage.save(&StoredState {
            user: Some(user.clone()),
            dark_mode: true,
        });

        let loaded = storage.load();
        let loaded_user = loaded.user.unwrap();
        assert_eq!(loaded_user.id, user.id);
        assert_eq!(loaded_user.token, "tok");
        assert!(loaded.dark_mode);
    }

    #[test]
    fn file_uses_fixed_keys() {
        let (_dir, storage) = temp_storage();
        storage.save(&StoredState {
            user: None,
            dark_mode: true,
        });

        let raw = std::fs::read_to_string(storage.path.clone()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["darkMode"], true);
    }

    #[test]
    fn corrupt_file_loads_default() {
        let (_dir, storage) = temp_storage();
        std::fs::create_dir_all(storage.path.parent().unwrap()).unwrap();
        std::fs::write(&storage.path, "{ not json").unwrap();
        let state = storage.load();
        assert!(state.user.is_none());
    }
}
