//! Persisted session pair: the bearer credential and the serialized profile.
//!
//! The two keys are always written and cleared together, only by the auth
//! store. A profile that fails to parse is treated as absent.

use crate::kv::KeyValueStore;
use crate::models::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Persist the credential and profile as a pair.
pub fn save<K: KeyValueStore>(storage: &K, token: &str, user: &User) {
    storage.set(TOKEN_KEY, token);
    if let Ok(serialized) = serde_json::to_string(user) {
        storage.set(USER_KEY, &serialized);
    }
}

/// The persisted credential, if any.
pub fn token<K: KeyValueStore>(storage: &K) -> Option<String> {
    storage.get(TOKEN_KEY)
}

/// The persisted profile, if present and parseable.
pub fn user<K: KeyValueStore>(storage: &K) -> Option<User> {
    let raw = storage.get(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Remove both halves of the pair.
pub fn clear<K: KeyValueStore>(storage: &K) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}
