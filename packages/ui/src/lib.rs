//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod shop;
pub use shop::{make_auth_store, make_sweet_store, AppAuthStore, AppSweetStore, PlatformStore};

mod auth;
pub use auth::{use_auth, use_sweets, LogoutButton, ShopProvider};

pub mod guard;
pub use guard::Gate;

mod navbar;
pub use navbar::Navbar;

mod sweet_card;
pub use sweet_card::SweetCard;

mod search_bar;
pub use search_bar::SearchBar;

mod sweet_modal;
pub use sweet_modal::SweetModal;
