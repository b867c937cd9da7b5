//! In-memory [`ShopApi`] implementation for tests and native fallback.
//!
//! `MemoryShop` enforces the same rules the real backend does — bearer
//! validation on every call, admin-only delete/restock, stock checking on
//! purchase — with the backend's detail strings, so stores driven against it
//! observe production behavior.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::api::{ApiError, ShopApi};
use crate::models::{
    AuthTokens, Credentials, Registration, SearchFilter, Sweet, SweetDraft, SweetPatch, User,
};

#[derive(Clone, Debug, Default)]
pub struct MemoryShop {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: Vec<Account>,
    sweets: Vec<Sweet>,
    sessions: HashMap<String, String>,
    token: Option<String>,
    next_user_id: i64,
    next_sweet_id: i64,
    next_session: u64,
}

#[derive(Debug)]
struct Account {
    user: User,
    password: String,
}

fn bad_request(detail: impl Into<String>) -> ApiError {
    ApiError::Server {
        status: 400,
        detail: detail.into(),
    }
}

fn unauthorized() -> ApiError {
    ApiError::Server {
        status: 401,
        detail: "Could not validate credentials".to_string(),
    }
}

fn forbidden() -> ApiError {
    ApiError::Server {
        status: 403,
        detail: "Not enough permissions".to_string(),
    }
}

fn not_found() -> ApiError {
    ApiError::Server {
        status: 404,
        detail: "Sweet not found".to_string(),
    }
}

// Schema-level validation failures carry no usable detail string, exactly
// like the backend's 422 replies, so callers exercise their fallbacks.
fn unprocessable() -> ApiError {
    ApiError::Server {
        status: 422,
        detail: String::new(),
    }
}

impl MemoryShop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account directly, bypassing registration.
    pub fn seed_user(&self, username: &str, email: &str, password: &str, is_admin: bool) -> User {
        let mut inner = self.inner.lock().unwrap();
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: username.to_string(),
            email: email.to_string(),
            is_admin,
        };
        inner.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }

    /// Add a sweet directly, bypassing creation. Returns the assigned id.
    pub fn seed_sweet(&self, name: &str, category: &str, price: f64, quantity: u32) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_sweet_id += 1;
        let id = inner.next_sweet_id;
        inner.sweets.push(Sweet {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            quantity,
            description: None,
            image_url: None,
        });
        id
    }

    /// Invalidate every issued session, simulating server-side expiry.
    pub fn revoke_sessions(&self) {
        self.inner.lock().unwrap().sessions.clear();
    }

    /// Flip an account's admin flag, simulating an out-of-band promotion.
    pub fn promote_to_admin(&self, username: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(account) = inner.accounts.iter_mut().find(|a| a.user.username == username) {
            account.user.is_admin = true;
        }
    }
}

impl Inner {
    fn authenticated(&self) -> Result<User, ApiError> {
        let token = self.token.as_ref().ok_or_else(unauthorized)?;
        let username = self.sessions.get(token).ok_or_else(unauthorized)?;
        self.accounts
            .iter()
            .find(|a| &a.user.username == username)
            .map(|a| a.user.clone())
            .ok_or_else(unauthorized)
    }

    fn admin(&self) -> Result<User, ApiError> {
        let user = self.authenticated()?;
        if !user.is_admin {
            return Err(forbidden());
        }
        Ok(user)
    }

    fn sweet_mut(&mut self, id: i64) -> Result<&mut Sweet, ApiError> {
        self.sweets.iter_mut().find(|s| s.id == id).ok_or_else(not_found)
    }
}

impl ShopApi for MemoryShop {
    fn set_token(&self, token: Option<&str>) {
        self.inner.lock().unwrap().token = token.map(str::to_string);
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        let username = inner
            .accounts
            .iter()
            .find(|a| a.user.username == credentials.username && a.password == credentials.password)
            .map(|a| a.user.username.clone())
            .ok_or_else(|| ApiError::Server {
                status: 401,
                detail: "Incorrect username or password".to_string(),
            })?;
        inner.next_session += 1;
        let token = format!("tok-{}-{}", username, inner.next_session);
        inner.sessions.insert(token.clone(), username);
        Ok(AuthTokens {
            access_token: token,
            token_type: "bearer".to_string(),
        })
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.inner.lock().unwrap().authenticated()
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if registration.username.len() < 3
            || registration.password.len() < 6
            || !registration.email.contains('@')
        {
            return Err(unprocessable());
        }
        if inner
            .accounts
            .iter()
            .any(|a| a.user.username == registration.username)
        {
            return Err(bad_request("Username already registered"));
        }
        if inner.accounts.iter().any(|a| a.user.email == registration.email) {
            return Err(bad_request("Email already registered"));
        }
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: registration.username.clone(),
            email: registration.email.clone(),
            is_admin: false,
        };
        inner.accounts.push(Account {
            user,
            password: registration.password.clone(),
        });
        Ok(())
    }

    async fn list_sweets(&self) -> Result<Vec<Sweet>, ApiError> {
        let inner = self.inner.lock().unwrap();
        inner.authenticated()?;
        Ok(inner.sweets.clone())
    }

    async fn get_sweet(&self, id: i64) -> Result<Sweet, ApiError> {
        let inner = self.inner.lock().unwrap();
        inner.authenticated()?;
        inner
            .sweets
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn search_sweets(&self, filter: &SearchFilter) -> Result<Vec<Sweet>, ApiError> {
        let inner = self.inner.lock().unwrap();
        inner.authenticated()?;
        let matches = |sweet: &Sweet| {
            let name_ok = filter
                .name
                .as_ref()
                .map_or(true, |n| sweet.name.to_lowercase().contains(&n.to_lowercase()));
            let category_ok = filter
                .category
                .as_ref()
                .map_or(true, |c| sweet.category.to_lowercase().contains(&c.to_lowercase()));
            let min_ok = filter.min_price.map_or(true, |min| sweet.price >= min);
            let max_ok = filter.max_price.map_or(true, |max| sweet.price <= max);
            name_ok && category_ok && min_ok && max_ok
        };
        Ok(inner.sweets.iter().filter(|s| matches(s)).cloned().collect())
    }

    async fn create_sweet(&self, draft: &SweetDraft) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.authenticated()?;
        if draft.name.is_empty() || draft.category.is_empty() || draft.price <= 0.0 {
            return Err(unprocessable());
        }
        inner.next_sweet_id += 1;
        let id = inner.next_sweet_id;
        inner.sweets.push(Sweet {
            id,
            name: draft.name.clone(),
            category: draft.category.clone(),
            price: draft.price,
            quantity: draft.quantity,
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
        });
        Ok(())
    }

    async fn update_sweet(&self, id: i64, patch: &SweetPatch) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.authenticated()?;
        let sweet = inner.sweet_mut(id)?;
        if let Some(name) = &patch.name {
            sweet.name = name.clone();
        }
        if let Some(category) = &patch.category {
            sweet.category = category.clone();
        }
        if let Some(price) = patch.price {
            sweet.price = price;
        }
        if let Some(quantity) = patch.quantity {
            sweet.quantity = quantity;
        }
        if let Some(description) = &patch.description {
            sweet.description = Some(description.clone());
        }
        if let Some(image_url) = &patch.image_url {
            sweet.image_url = Some(image_url.clone());
        }
        Ok(())
    }

    async fn delete_sweet(&self, id: i64) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.admin()?;
        let before = inner.sweets.len();
        inner.sweets.retain(|s| s.id != id);
        if inner.sweets.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn purchase_sweet(&self, id: i64, quantity: u32) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.authenticated()?;
        let sweet = inner.sweet_mut(id)?;
        if sweet.quantity < quantity {
            return Err(bad_request(format!(
                "Not enough stock. Available: {}",
                sweet.quantity
            )));
        }
        sweet.quantity -= quantity;
        Ok(())
    }

    async fn restock_sweet(&self, id: i64, quantity: u32) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.admin()?;
        let sweet = inner.sweet_mut(id)?;
        sweet.quantity += quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn signed_in(shop: &MemoryShop, username: &str, password: &str) {
        let tokens = shop
            .login(&Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap();
        shop.set_token(Some(&tokens.access_token));
    }

    #[tokio::test]
    async fn every_login_issues_a_fresh_token() {
        let shop = MemoryShop::new();
        shop.seed_user("alice", "alice@example.com", "caramel1", false);
        let creds = Credentials {
            username: "alice".to_string(),
            password: "caramel1".to_string(),
        };
        let first = shop.login(&creds).await.unwrap();
        let second = shop.login(&creds).await.unwrap();
        assert_ne!(first.access_token, second.access_token);
        assert_eq!(first.token_type, "bearer");
    }

    #[tokio::test]
    async fn sweets_endpoints_require_a_valid_token() {
        let shop = MemoryShop::new();
        shop.seed_sweet("Fudge", "Chocolate", 4.0, 3);
        let err = shop.list_sweets().await.unwrap_err();
        assert!(err.is_unauthorized());

        shop.set_token(Some("forged"));
        let err = shop.list_sweets().await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn create_rejects_non_positive_price() {
        let shop = MemoryShop::new();
        shop.seed_user("alice", "alice@example.com", "caramel1", false);
        signed_in(&shop, "alice", "caramel1").await;
        let err = shop
            .create_sweet(&SweetDraft {
                name: "Free Candy".to_string(),
                category: "Suspicious".to_string(),
                price: 0.0,
                quantity: 10,
                description: None,
                image_url: None,
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 422,
                detail: String::new()
            }
        );
    }

    #[tokio::test]
    async fn get_sweet_reports_not_found() {
        let shop = MemoryShop::new();
        shop.seed_user("alice", "alice@example.com", "caramel1", false);
        signed_in(&shop, "alice", "caramel1").await;
        let err = shop.get_sweet(99).await.unwrap_err();
        assert_eq!(err.detail_or(""), "Sweet not found");

        let id = shop.seed_sweet("Fudge", "Chocolate", 4.0, 3);
        assert_eq!(shop.get_sweet(id).await.unwrap().name, "Fudge");
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring_match() {
        let shop = MemoryShop::new();
        shop.seed_user("alice", "alice@example.com", "caramel1", false);
        signed_in(&shop, "alice", "caramel1").await;
        shop.seed_sweet("Gummy Bear", "Gummies", 2.5, 100);
        shop.seed_sweet("Dark Truffle", "Chocolate", 6.0, 20);

        let found = shop
            .search_sweets(&SearchFilter {
                name: Some("gummy".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Gummy Bear");
    }
}
