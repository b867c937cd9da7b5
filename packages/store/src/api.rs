//! # The backend contract
//!
//! [`ShopApi`] is the async interface every backend implementation fulfils.
//! The real HTTP client (the `api` crate) implements it over `reqwest`;
//! [`crate::MemoryShop`] implements it in memory for tests and native demos.
//! The stores ([`crate::AuthStore`], [`crate::SweetStore`]) are generic over
//! the trait, so the same store logic runs against either backend.
//!
//! Every call is a single best-effort round trip: no retry, no timeout, no
//! caching. The attached bearer credential is ambient — set once via
//! [`ShopApi::set_token`], sent on every subsequent call.

use crate::models::{
    AuthTokens, Credentials, Registration, SearchFilter, Sweet, SweetDraft, SweetPatch, User,
};

/// Failure taxonomy for backend calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx reply. `detail` carries the server's `detail` field when the
    /// body had one, and is empty otherwise.
    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },
    /// The request never produced a reply.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx reply whose body failed to parse.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-supplied detail when present, otherwise `fallback`.
    /// This is the single normalization point for user-facing messages.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { detail, .. } if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True for a 401 — a missing or rejected credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status: 401, .. })
    }
}

/// Async interface to the Sweet Shop backend.
pub trait ShopApi {
    /// Attach (or detach, with `None`) the bearer credential sent on every
    /// subsequent call. Clones of an implementation share the credential.
    fn set_token(&self, token: Option<&str>);

    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<AuthTokens, ApiError>>;

    fn current_user(&self) -> impl std::future::Future<Output = Result<User, ApiError>>;

    fn register(
        &self,
        registration: &Registration,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn list_sweets(&self) -> impl std::future::Future<Output = Result<Vec<Sweet>, ApiError>>;

    fn get_sweet(&self, id: i64) -> impl std::future::Future<Output = Result<Sweet, ApiError>>;

    fn search_sweets(
        &self,
        filter: &SearchFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Sweet>, ApiError>>;

    fn create_sweet(
        &self,
        draft: &SweetDraft,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn update_sweet(
        &self,
        id: i64,
        patch: &SweetPatch,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn delete_sweet(&self, id: i64) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn purchase_sweet(
        &self,
        id: i64,
        quantity: u32,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn restock_sweet(
        &self,
        id: i64,
        quantity: u32,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_or_prefers_server_detail() {
        let err = ApiError::Server {
            status: 400,
            detail: "Not enough stock. Available: 5".to_string(),
        };
        assert_eq!(err.detail_or("Purchase failed"), "Not enough stock. Available: 5");
    }

    #[test]
    fn detail_or_falls_back_when_detail_empty() {
        let err = ApiError::Server {
            status: 422,
            detail: String::new(),
        };
        assert_eq!(err.detail_or("Registration failed"), "Registration failed");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.detail_or("Login failed"), "Login failed");
    }

    #[test]
    fn unauthorized_is_only_401() {
        let unauthorized = ApiError::Server {
            status: 401,
            detail: String::new(),
        };
        let forbidden = ApiError::Server {
            status: 403,
            detail: String::new(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
    }
}
