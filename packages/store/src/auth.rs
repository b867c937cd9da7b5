//! # Auth store — session state and its reconciliation with durable storage
//!
//! [`AuthStore`] owns the current user, the bearer credential, and the
//! persisted copy of both. It is an explicit container: construct one per
//! app (or per test) with any [`ShopApi`] + [`KeyValueStore`] pair — there
//! is no ambient singleton.
//!
//! Construction loads any persisted session and attaches the credential to
//! the API handle, so a reloaded page starts signed in; `check_auth` is the
//! sole point that re-validates that persisted session against the server
//! and purges it when rejected.

use crate::api::{ApiError, ShopApi};
use crate::kv::KeyValueStore;
use crate::models::{Credentials, Registration, User};
use crate::session;

#[derive(Clone)]
pub struct AuthStore<A: ShopApi, K: KeyValueStore> {
    api: A,
    storage: K,
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<A: ShopApi, K: KeyValueStore> AuthStore<A, K> {
    /// Build a store over the given backend and persistence, resuming any
    /// persisted session.
    pub fn new(api: A, storage: K) -> Self {
        let token = session::token(&storage);
        let user = session::user(&storage);
        if let Some(token) = &token {
            api.set_token(Some(token));
        }
        Self {
            api,
            storage,
            user,
            token,
            loading: false,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map_or(false, |u| u.is_admin)
    }

    /// Exchange credentials for a bearer token, fetch the profile, and
    /// persist both as a pair. On failure the error is recorded and
    /// re-thrown so the caller can react; no partial session is left in
    /// storage.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;
        let result = self.establish_session(credentials).await;
        self.loading = false;
        if let Err(err) = &result {
            self.error = Some(err.detail_or("Login failed"));
        }
        result
    }

    async fn establish_session(&mut self, credentials: &Credentials) -> Result<(), ApiError> {
        let tokens = self.api.login(credentials).await?;
        self.api.set_token(Some(&tokens.access_token));
        let user = match self.api.current_user().await {
            Ok(user) => user,
            Err(err) => {
                // Profile fetch failed mid-login: fall back to whatever
                // credential was in effect before, persisting nothing.
                self.api.set_token(self.token.as_deref());
                return Err(err);
            }
        };
        session::save(&self.storage, &tokens.access_token, &user);
        self.token = Some(tokens.access_token);
        self.user = Some(user);
        Ok(())
    }

    /// Create an account. Does not sign in — the caller routes to login.
    pub async fn register(&mut self, registration: &Registration) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;
        let result = self.api.register(registration).await;
        self.loading = false;
        if let Err(err) = &result {
            self.error = Some(err.detail_or("Registration failed"));
        }
        result
    }

    /// Clear durable storage and in-memory session. No network call.
    pub fn logout(&mut self) {
        session::clear(&self.storage);
        self.api.set_token(None);
        self.user = None;
        self.token = None;
    }

    /// Reconcile in-memory state with durable storage: re-validate any
    /// persisted credential against the server, refreshing the persisted
    /// profile on success and purging everything on failure. An expired
    /// session is expected, not exceptional, so no error is surfaced.
    pub async fn check_auth(&mut self) {
        let Some(token) = session::token(&self.storage) else {
            self.api.set_token(None);
            self.user = None;
            self.token = None;
            return;
        };
        self.api.set_token(Some(&token));
        match self.api.current_user().await {
            Ok(user) => {
                session::save(&self.storage, &token, &user);
                self.user = Some(user);
                self.token = Some(token);
            }
            Err(_) => {
                session::clear(&self.storage);
                self.api.set_token(None);
                self.user = None;
                self.token = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::memory::MemoryShop;

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn shop_with_alice() -> MemoryShop {
        let shop = MemoryShop::new();
        shop.seed_user("alice", "alice@example.com", "caramel1", false);
        shop
    }

    #[tokio::test]
    async fn login_sets_state_and_persists_the_pair() {
        let storage = MemoryStore::new();
        let mut auth = AuthStore::new(shop_with_alice(), storage.clone());

        auth.login(&creds("alice", "caramel1")).await.unwrap();

        assert!(auth.is_authenticated());
        assert!(!auth.loading);
        assert_eq!(auth.error, None);
        let user = auth.user.as_ref().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(session::token(&storage), auth.token);
        assert_eq!(session::user(&storage).unwrap().username, "alice");
    }

    #[tokio::test]
    async fn failed_login_records_detail_and_leaves_no_session() {
        let storage = MemoryStore::new();
        let mut auth = AuthStore::new(shop_with_alice(), storage.clone());

        let err = auth.login(&creds("alice", "wrong")).await.unwrap_err();

        assert_eq!(err.detail_or(""), "Incorrect username or password");
        assert_eq!(auth.error.as_deref(), Some("Incorrect username or password"));
        assert!(!auth.loading);
        assert!(!auth.is_authenticated());
        assert_eq!(session::token(&storage), None);
        assert_eq!(session::user(&storage), None);
    }

    #[tokio::test]
    async fn register_does_not_sign_in() {
        let storage = MemoryStore::new();
        let mut auth = AuthStore::new(MemoryShop::new(), storage.clone());

        auth.register(&Registration {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "toffee99".to_string(),
        })
        .await
        .unwrap();

        assert!(!auth.is_authenticated());
        assert_eq!(session::token(&storage), None);
    }

    #[tokio::test]
    async fn register_falls_back_to_generic_message_without_detail() {
        let mut auth = AuthStore::new(MemoryShop::new(), MemoryStore::new());

        // Password below the server minimum: 422 with an empty detail.
        let err = auth
            .register(&Registration {
                username: "bob".to_string(),
                email: "bob@example.com".to_string(),
                password: "ab".to_string(),
            })
            .await
            .unwrap_err();

        assert!(!err.is_unauthorized());
        assert_eq!(auth.error.as_deref(), Some("Registration failed"));
    }

    #[tokio::test]
    async fn register_surfaces_duplicate_username_detail() {
        let mut auth = AuthStore::new(shop_with_alice(), MemoryStore::new());

        auth.register(&Registration {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            password: "toffee99".to_string(),
        })
        .await
        .unwrap_err();

        assert_eq!(auth.error.as_deref(), Some("Username already registered"));
    }

    #[tokio::test]
    async fn logout_then_check_auth_stays_signed_out() {
        let storage = MemoryStore::new();
        let mut auth = AuthStore::new(shop_with_alice(), storage.clone());
        auth.login(&creds("alice", "caramel1")).await.unwrap();

        auth.logout();
        auth.check_auth().await;

        assert!(!auth.is_authenticated());
        assert_eq!(auth.token, None);
        assert_eq!(session::token(&storage), None);
        assert_eq!(session::user(&storage), None);
    }

    #[tokio::test]
    async fn check_auth_purges_a_rejected_credential_idempotently() {
        let shop = shop_with_alice();
        let storage = MemoryStore::new();
        let mut auth = AuthStore::new(shop.clone(), storage.clone());
        auth.login(&creds("alice", "caramel1")).await.unwrap();

        shop.revoke_sessions();
        auth.check_auth().await;

        assert!(!auth.is_authenticated());
        assert_eq!(auth.error, None);
        assert_eq!(session::token(&storage), None);

        // Second run from the purged state lands in the same place.
        auth.check_auth().await;
        assert!(!auth.is_authenticated());
        assert_eq!(session::token(&storage), None);
    }

    #[tokio::test]
    async fn check_auth_refreshes_the_persisted_profile() {
        let shop = shop_with_alice();
        let storage = MemoryStore::new();
        let mut auth = AuthStore::new(shop.clone(), storage.clone());
        auth.login(&creds("alice", "caramel1")).await.unwrap();
        assert!(!auth.is_admin());

        shop.promote_to_admin("alice");
        auth.check_auth().await;

        assert!(auth.is_admin());
        assert!(session::user(&storage).unwrap().is_admin);
    }

    #[tokio::test]
    async fn new_resumes_a_persisted_session() {
        let shop = shop_with_alice();
        let storage = MemoryStore::new();
        let mut first = AuthStore::new(shop.clone(), storage.clone());
        first.login(&creds("alice", "caramel1")).await.unwrap();

        // A fresh store over the same storage starts signed in, and the
        // resumed credential is live against the backend.
        let mut second = AuthStore::new(shop, storage);
        assert!(second.is_authenticated());
        assert_eq!(second.token, first.token);
        second.check_auth().await;
        assert!(second.is_authenticated());
    }
}
