//! # API crate — the HTTP implementation of the backend contract
//!
//! [`Client`] implements [`store::ShopApi`] over `reqwest` against the Sweet
//! Shop REST backend. It is deliberately thin: base-URL joining, bearer
//! header injection, and `detail` extraction from error bodies — nothing
//! else. No retry, no timeout, no caching; every call is a single
//! best-effort round trip, and all behavior above the wire (state,
//! refresh-after-write, session persistence) lives in the `store` crate.
//!
//! | Call | Method/Path |
//! |------|-------------|
//! | `login` | POST `/auth/login` |
//! | `current_user` | GET `/auth/me` |
//! | `register` | POST `/auth/register` |
//! | `list_sweets` | GET `/sweets` |
//! | `get_sweet` | GET `/sweets/{id}` |
//! | `search_sweets` | GET `/sweets/search` |
//! | `create_sweet` | POST `/sweets` |
//! | `update_sweet` | PUT `/sweets/{id}` |
//! | `delete_sweet` | DELETE `/sweets/{id}` |
//! | `purchase_sweet` | POST `/sweets/{id}/purchase` |
//! | `restock_sweet` | POST `/sweets/{id}/restock` |

mod client;
pub use client::{Client, DEFAULT_BASE_URL};
