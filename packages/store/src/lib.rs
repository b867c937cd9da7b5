pub mod models;
pub mod session;

mod api;
pub use api::{ApiError, ShopApi};

mod kv;
pub use kv::{KeyValueStore, MemoryStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

mod memory;
pub use memory::MemoryShop;

mod auth;
pub use auth::AuthStore;

mod sweets;
pub use sweets::SweetStore;

pub use models::{
    AuthTokens, Credentials, Registration, SearchFilter, Sweet, SweetDraft, SweetPatch, User,
};
