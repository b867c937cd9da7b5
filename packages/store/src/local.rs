//! Browser `localStorage` backend for the web platform.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes): a browser with storage blocked degrades to
//! "no persisted session" rather than crashing, and the server remains the
//! authority on whether a session is live.

use crate::kv::KeyValueStore;

/// `localStorage`-backed KeyValueStore, scoped to the page origin.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
