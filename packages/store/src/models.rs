//! Wire and data types shared across the workspace.
//!
//! Field names match the backend's JSON verbatim, so every type here
//! (de)serializes directly against the REST API without renames.

use serde::{Deserialize, Serialize};

/// A purchasable inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A sweet about to be created — everything but the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweetDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A partial update to a sweet. Unset fields are omitted from the request
/// body, so the backend only touches what the caller provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Search filters for the inventory. Every field is optional; unset keys
/// never appear in the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchFilter {
    /// True when no filter is set. Callers should prefer a plain list fetch
    /// over a search in that case.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// The populated subset as query pairs, for the `/sweets/search` call.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("max_price", max_price.to_string()));
        }
        pairs
    }
}

/// An authenticated account, as returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

/// The bearer credential issued by `/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
}

/// Login form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_filter_omits_unset_keys() {
        let filter = SearchFilter {
            name: Some("gummy".to_string()),
            max_price: Some(5.0),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("name", "gummy".to_string()),
                ("max_price", "5".to_string())
            ]
        );
    }

    #[test]
    fn empty_search_filter_has_no_query() {
        let filter = SearchFilter::default();
        assert!(filter.is_empty());
        assert!(filter.to_query().is_empty());
    }

    #[test]
    fn sweet_patch_serializes_only_set_fields() {
        let patch = SweetPatch {
            price: Some(3.25),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let body = value.as_object().unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body["price"], 3.25);
    }

    #[test]
    fn sweet_tolerates_missing_optional_fields() {
        let sweet: Sweet = serde_json::from_str(
            r#"{"id":1,"name":"Fudge","category":"Chocolate","price":4.0,"quantity":3}"#,
        )
        .unwrap();
        assert_eq!(sweet.description, None);
        assert_eq!(sweet.image_url, None);
    }
}
