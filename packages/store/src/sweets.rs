//! # Sweet store — the inventory mirror
//!
//! [`SweetStore`] holds the client's copy of the inventory in the order the
//! server returned it. It never computes post-mutation state itself: every
//! mutation performs its single API call and then unconditionally re-fetches
//! the full collection ("refresh-after-write"), trading an extra round trip
//! for the guarantee that local state always equals server truth. Reads
//! replace the whole collection.
//!
//! Mutations record a normalized error message and re-throw the underlying
//! [`ApiError`] so pages can show contextual messaging on top of the store
//! banner; reads only record. The loading flag is cleared on every path.

use crate::api::{ApiError, ShopApi};
use crate::models::{SearchFilter, Sweet, SweetDraft, SweetPatch};

#[derive(Clone)]
pub struct SweetStore<A: ShopApi> {
    api: A,
    pub sweets: Vec<Sweet>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<A: ShopApi> SweetStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            sweets: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Replace the collection with the full server list.
    pub async fn fetch(&mut self) {
        self.begin();
        match self.api.list_sweets().await {
            Ok(sweets) => self.sweets = sweets,
            Err(err) => self.error = Some(err.detail_or("Failed to fetch sweets")),
        }
        self.loading = false;
    }

    /// Replace the collection with the filtered result. This is a full
    /// replace, not a merge. An empty filter is not special-cased here:
    /// a caller meaning "show everything" should call `fetch` instead.
    /// The two calls hit different endpoints with the same outcome.
    pub async fn search(&mut self, filter: &SearchFilter) {
        self.begin();
        match self.api.search_sweets(filter).await {
            Ok(sweets) => self.sweets = sweets,
            Err(err) => self.error = Some(err.detail_or("Failed to search sweets")),
        }
        self.loading = false;
    }

    pub async fn create(&mut self, draft: &SweetDraft) -> Result<(), ApiError> {
        self.begin();
        let result = match self.api.create_sweet(draft).await {
            Ok(()) => self.resync().await,
            Err(err) => Err(err),
        };
        self.finish(result, "Failed to create sweet")
    }

    pub async fn update(&mut self, id: i64, patch: &SweetPatch) -> Result<(), ApiError> {
        self.begin();
        let result = match self.api.update_sweet(id, patch).await {
            Ok(()) => self.resync().await,
            Err(err) => Err(err),
        };
        self.finish(result, "Failed to update sweet")
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        self.begin();
        let result = match self.api.delete_sweet(id).await {
            Ok(()) => self.resync().await,
            Err(err) => Err(err),
        };
        self.finish(result, "Failed to delete sweet")
    }

    pub async fn purchase(&mut self, id: i64, quantity: u32) -> Result<(), ApiError> {
        self.begin();
        let result = match self.api.purchase_sweet(id, quantity).await {
            Ok(()) => self.resync().await,
            Err(err) => Err(err),
        };
        self.finish(result, "Failed to purchase sweet")
    }

    pub async fn restock(&mut self, id: i64, quantity: u32) -> Result<(), ApiError> {
        self.begin();
        let result = match self.api.restock_sweet(id, quantity).await {
            Ok(()) => self.resync().await,
            Err(err) => Err(err),
        };
        self.finish(result, "Failed to restock sweet")
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self, result: Result<(), ApiError>, fallback: &str) -> Result<(), ApiError> {
        self.loading = false;
        if let Err(err) = &result {
            self.error = Some(err.detail_or(fallback));
        }
        result
    }

    // The second half of every mutation: pull the authoritative collection.
    async fn resync(&mut self) -> Result<(), ApiError> {
        self.sweets = self.api.list_sweets().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryShop;
    use crate::models::Credentials;

    async fn signed_in_shop(admin: bool) -> MemoryShop {
        let shop = MemoryShop::new();
        shop.seed_user("pat", "pat@example.com", "nougat77", admin);
        let tokens = shop
            .login(&Credentials {
                username: "pat".to_string(),
                password: "nougat77".to_string(),
            })
            .await
            .unwrap();
        shop.set_token(Some(&tokens.access_token));
        shop
    }

    #[tokio::test]
    async fn fetch_mirrors_server_order() {
        let shop = signed_in_shop(false).await;
        shop.seed_sweet("Toffee", "Hard Candy", 1.5, 40);
        shop.seed_sweet("Gummy Bear", "Gummies", 2.5, 100);
        let mut store = SweetStore::new(shop);

        store.fetch().await;

        assert!(!store.loading);
        assert_eq!(store.error, None);
        let names: Vec<_> = store.sweets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Toffee", "Gummy Bear"]);
    }

    #[tokio::test]
    async fn create_refreshes_and_carries_a_server_id() {
        let shop = signed_in_shop(false).await;
        let mut store = SweetStore::new(shop);

        store
            .create(&SweetDraft {
                name: "Gummy Bear".to_string(),
                category: "Gummies".to_string(),
                price: 2.5,
                quantity: 100,
                description: None,
                image_url: None,
            })
            .await
            .unwrap();

        assert_eq!(store.sweets.len(), 1);
        let sweet = &store.sweets[0];
        assert!(sweet.id > 0);
        assert_eq!(sweet.name, "Gummy Bear");
        assert_eq!(sweet.category, "Gummies");
        assert_eq!(sweet.price, 2.5);
        assert_eq!(sweet.quantity, 100);
    }

    #[tokio::test]
    async fn create_with_invalid_price_is_rejected_and_rethrown() {
        let shop = signed_in_shop(false).await;
        let mut store = SweetStore::new(shop);

        let err = store
            .create(&SweetDraft {
                name: "Freebie".to_string(),
                category: "Gummies".to_string(),
                price: 0.0,
                quantity: 5,
                description: None,
                image_url: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Server { status: 422, .. }));
        assert_eq!(store.error.as_deref(), Some("Failed to create sweet"));
        assert!(!store.loading);
        assert!(store.sweets.is_empty());
    }

    #[tokio::test]
    async fn update_touches_only_patched_fields() {
        let shop = signed_in_shop(false).await;
        let id = shop.seed_sweet("Toffee", "Hard Candy", 1.5, 40);
        let mut store = SweetStore::new(shop);
        store.fetch().await;

        store
            .update(
                id,
                &SweetPatch {
                    price: Some(1.75),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let sweet = &store.sweets[0];
        assert_eq!(sweet.price, 1.75);
        assert_eq!(sweet.name, "Toffee");
        assert_eq!(sweet.quantity, 40);
    }

    #[tokio::test]
    async fn purchase_decrements_through_the_refresh() {
        let shop = signed_in_shop(false).await;
        let id = shop.seed_sweet("Toffee", "Hard Candy", 1.5, 40);
        let mut store = SweetStore::new(shop);
        store.fetch().await;

        store.purchase(id, 3).await.unwrap();

        assert_eq!(store.sweets[0].quantity, 37);
        assert_eq!(store.error, None);
    }

    #[tokio::test]
    async fn oversized_purchase_is_rejected_and_stock_unchanged() {
        let shop = signed_in_shop(false).await;
        let id = shop.seed_sweet("Toffee", "Hard Candy", 1.5, 5);
        let mut store = SweetStore::new(shop);
        store.fetch().await;

        let err = store.purchase(id, 1000).await.unwrap_err();

        assert_eq!(err.detail_or(""), "Not enough stock. Available: 5");
        assert_eq!(store.error.as_deref(), Some("Not enough stock. Available: 5"));
        assert_eq!(store.sweets[0].quantity, 5);
        assert!(!store.loading);
    }

    #[tokio::test]
    async fn restock_adds_to_the_current_quantity() {
        let shop = signed_in_shop(true).await;
        let id = shop.seed_sweet("Toffee", "Hard Candy", 1.5, 10);
        let mut store = SweetStore::new(shop);
        store.fetch().await;

        store.restock(id, 5).await.unwrap();

        assert_eq!(store.sweets[0].quantity, 15);
    }

    #[tokio::test]
    async fn delete_and_restock_are_admin_only() {
        let shop = signed_in_shop(false).await;
        let id = shop.seed_sweet("Toffee", "Hard Candy", 1.5, 10);
        let mut store = SweetStore::new(shop);
        store.fetch().await;

        let err = store.delete(id).await.unwrap_err();
        assert_eq!(err.detail_or(""), "Not enough permissions");

        let err = store.restock(id, 5).await.unwrap_err();
        assert_eq!(err.detail_or(""), "Not enough permissions");

        assert_eq!(store.sweets.len(), 1);
        assert_eq!(store.sweets[0].quantity, 10);
    }

    #[tokio::test]
    async fn delete_removes_from_the_refreshed_list() {
        let shop = signed_in_shop(true).await;
        let keep = shop.seed_sweet("Toffee", "Hard Candy", 1.5, 10);
        let removed = shop.seed_sweet("Fudge", "Chocolate", 4.0, 3);
        let mut store = SweetStore::new(shop);
        store.fetch().await;

        store.delete(removed).await.unwrap();

        assert_eq!(store.sweets.len(), 1);
        assert_eq!(store.sweets[0].id, keep);
    }

    #[tokio::test]
    async fn search_replaces_the_collection_with_the_filtered_result() {
        let shop = signed_in_shop(false).await;
        shop.seed_sweet("Gummy Bear", "Gummies", 2.5, 100);
        shop.seed_sweet("Gummy Worm", "Gummies", 3.5, 50);
        shop.seed_sweet("Dark Truffle", "Chocolate", 6.0, 20);
        let mut store = SweetStore::new(shop);
        store.fetch().await;
        assert_eq!(store.sweets.len(), 3);

        store
            .search(&SearchFilter {
                category: Some("gummies".to_string()),
                max_price: Some(3.0),
                ..Default::default()
            })
            .await;

        assert_eq!(store.sweets.len(), 1);
        assert_eq!(store.sweets[0].name, "Gummy Bear");
    }

    #[tokio::test]
    async fn empty_filter_search_matches_a_full_fetch() {
        // The two calls hit different endpoints but must agree when no
        // filter is set; pages prefer `fetch` in that case.
        let shop = signed_in_shop(false).await;
        shop.seed_sweet("Gummy Bear", "Gummies", 2.5, 100);
        shop.seed_sweet("Dark Truffle", "Chocolate", 6.0, 20);
        let mut store = SweetStore::new(shop);

        store.search(&SearchFilter::default()).await;
        let searched = store.sweets.clone();
        store.fetch().await;

        assert_eq!(searched, store.sweets);
    }

    #[tokio::test]
    async fn read_failures_record_but_do_not_panic_loading() {
        // No token attached: every call is a 401.
        let shop = MemoryShop::new();
        shop.seed_sweet("Toffee", "Hard Candy", 1.5, 10);
        let mut store = SweetStore::new(shop);

        store.fetch().await;

        assert!(!store.loading);
        assert_eq!(store.error.as_deref(), Some("Could not validate credentials"));
        assert!(store.sweets.is_empty());
    }
}
