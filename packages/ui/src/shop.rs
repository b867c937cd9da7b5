//! Platform wiring for the stores.
//!
//! Session persistence is backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via `store::LocalStore`
//! - **Native** (tests, demos): in-memory via `store::MemoryStore`

use api::Client;
use store::{AuthStore, SweetStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type AppAuthStore = AuthStore<Client, PlatformStore>;
pub type AppSweetStore = SweetStore<Client>;

/// Auth store over the platform persistence, resuming any saved session.
pub fn make_auth_store(client: Client) -> AppAuthStore {
    AuthStore::new(client, PlatformStore::new())
}

/// Sweet store sharing the same client (and so the same credential).
pub fn make_sweet_store(client: Client) -> AppSweetStore {
    SweetStore::new(client)
}
