use std::sync::{Arc, RwLock};

use reqwest::Method;
use serde::Serialize;
use store::models::{
    AuthTokens, Credentials, Registration, SearchFilter, Sweet, SweetDraft, SweetPatch, User,
};
use store::{ApiError, ShopApi};

/// Where the backend listens in development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// HTTP client for the Sweet Shop backend.
///
/// Clones share the credential cell, so the auth store and the sweet store
/// always send the same bearer token.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

#[derive(Serialize)]
struct QuantityBody {
    quantity: u32,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.token.read().unwrap().as_ref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await.map_err(|err| {
            tracing::debug!(error = %err, "request did not reach the backend");
            ApiError::Network(err.to_string())
        })?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(server_error(response).await)
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn run(&self, builder: reqwest::RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }
}

async fn server_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| extract_detail(&body))
        .unwrap_or_default();
    ApiError::Server { status, detail }
}

// The backend reports failures as `{"detail": "..."}`. Schema-validation
// replies carry a structured `detail` instead of a string; those map to an
// empty detail so callers fall back to their own messages.
fn extract_detail(body: &serde_json::Value) -> Option<String> {
    body.get("detail")?.as_str().map(str::to_string)
}

impl ShopApi for Client {
    fn set_token(&self, token: Option<&str>) {
        *self.token.write().unwrap() = token.map(str::to_string);
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        self.fetch(self.request(Method::POST, "/auth/login").json(credentials))
            .await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(self.request(Method::GET, "/auth/me")).await
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.run(self.request(Method::POST, "/auth/register").json(registration))
            .await
    }

    async fn list_sweets(&self) -> Result<Vec<Sweet>, ApiError> {
        self.fetch(self.request(Method::GET, "/sweets")).await
    }

    async fn get_sweet(&self, id: i64) -> Result<Sweet, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/sweets/{id}")))
            .await
    }

    async fn search_sweets(&self, filter: &SearchFilter) -> Result<Vec<Sweet>, ApiError> {
        self.fetch(
            self.request(Method::GET, "/sweets/search")
                .query(&filter.to_query()),
        )
        .await
    }

    async fn create_sweet(&self, draft: &SweetDraft) -> Result<(), ApiError> {
        self.run(self.request(Method::POST, "/sweets").json(draft))
            .await
    }

    async fn update_sweet(&self, id: i64, patch: &SweetPatch) -> Result<(), ApiError> {
        self.run(
            self.request(Method::PUT, &format!("/sweets/{id}"))
                .json(patch),
        )
        .await
    }

    async fn delete_sweet(&self, id: i64) -> Result<(), ApiError> {
        self.run(self.request(Method::DELETE, &format!("/sweets/{id}")))
            .await
    }

    async fn purchase_sweet(&self, id: i64, quantity: u32) -> Result<(), ApiError> {
        self.run(
            self.request(Method::POST, &format!("/sweets/{id}/purchase"))
                .json(&QuantityBody { quantity }),
        )
        .await
    }

    async fn restock_sweet(&self, id: i64, quantity: u32) -> Result<(), ApiError> {
        self.run(
            self.request(Method::POST, &format!("/sweets/{id}/restock"))
                .json(&QuantityBody { quantity }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let client = Client::new("http://localhost:8000/api/");
        assert_eq!(client.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn extract_detail_takes_string_details_only() {
        let body = serde_json::json!({ "detail": "Sweet not found" });
        assert_eq!(extract_detail(&body).as_deref(), Some("Sweet not found"));

        // FastAPI-style validation reply: detail is an array, not a string.
        let body = serde_json::json!({ "detail": [{ "msg": "field required" }] });
        assert_eq!(extract_detail(&body), None);

        let body = serde_json::json!({ "message": "nope" });
        assert_eq!(extract_detail(&body), None);
    }

    #[test]
    fn quantity_body_matches_the_wire_shape() {
        let body = serde_json::to_value(QuantityBody { quantity: 3 }).unwrap();
        assert_eq!(body, serde_json::json!({ "quantity": 3 }));
    }
}
