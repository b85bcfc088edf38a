//! Wishlist repository
//!
//! Wishlists are loaded lazily, one blob per user, the first time a user's
//! wishlist is touched.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use common::{SharedStore, StoreResult, load_json, save_json};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::wishlist_key;
use crate::models::{Wishlist, WishlistItem};

/// Wishlist repository
#[derive(Clone)]
pub struct WishlistRepository {
    store: SharedStore,
    wishlists: Arc<RwLock<HashMap<String, Wishlist>>>,
}

impl WishlistRepository {
    /// Create a new wishlist repository
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            wishlists: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn load_from_store(&self, user_id: &str) -> StoreResult<Wishlist> {
        let items: Vec<WishlistItem> = load_json(self.store.as_ref(), &wishlist_key(user_id))
            .await?
            .unwrap_or_default();
        debug!("Loaded {} wishlist items for user {}", items.len(), user_id);
        Ok(Wishlist::from_items(user_id, items))
    }

    /// Current wishlist of `user_id`
    pub async fn get(&self, user_id: &str) -> StoreResult<Wishlist> {
        if let Some(wishlist) = self.wishlists.read().await.get(user_id) {
            return Ok(wishlist.clone());
        }

        let mut wishlists = self.wishlists.write().await;
        if let Some(wishlist) = wishlists.get(user_id) {
            return Ok(wishlist.clone());
        }
        let wishlist = self.load_from_store(user_id).await?;
        wishlists.insert(user_id.to_string(), wishlist.clone());
        Ok(wishlist)
    }

    /// Apply `change` to the wishlist of `user_id`, persisting it when the
    /// change reports a modification
    async fn mutate<T>(
        &self,
        user_id: &str,
        change: impl FnOnce(&mut Wishlist) -> (T, bool),
    ) -> StoreResult<T> {
        let mut wishlists = self.wishlists.write().await;
        let mut wishlist = match wishlists.get(user_id) {
            Some(wishlist) => wishlist.clone(),
            None => self.load_from_store(user_id).await?,
        };

        let (result, modified) = change(&mut wishlist);
        if modified {
            save_json(self.store.as_ref(), &wishlist_key(user_id), wishlist.items()).await?;
        }
        wishlists.insert(user_id.to_string(), wishlist);
        Ok(result)
    }

    /// Items of `user_id` in insertion order
    pub async fn items(&self, user_id: &str) -> StoreResult<Vec<WishlistItem>> {
        Ok(self.get(user_id).await?.items().to_vec())
    }

    /// Whether `listing_id` is in the wishlist of `user_id`
    pub async fn contains(&self, user_id: &str, listing_id: &str) -> StoreResult<bool> {
        Ok(self.get(user_id).await?.contains(listing_id))
    }

    /// Add `listing_id`, returning the item and whether it was created
    pub async fn add(
        &self,
        user_id: &str,
        listing_id: &str,
        price_alert: Option<u64>,
    ) -> StoreResult<(WishlistItem, bool)> {
        let (item, created) = self
            .mutate(user_id, |wishlist| {
                let (item, created) = wishlist.add(listing_id, price_alert, Utc::now());
                ((item, created), created)
            })
            .await?;

        if created {
            info!("User {} added {} to wishlist", user_id, listing_id);
        }
        Ok((item, created))
    }

    /// Remove `listing_id`; `false` when it was not in the wishlist
    pub async fn remove(&self, user_id: &str, listing_id: &str) -> StoreResult<bool> {
        let removed = self
            .mutate(user_id, |wishlist| {
                let removed = wishlist.remove(listing_id);
                (removed, removed)
            })
            .await?;

        if removed {
            info!("User {} removed {} from wishlist", user_id, listing_id);
        }
        Ok(removed)
    }

    /// Set the price alert on `listing_id`; `None` when it is not in the
    /// wishlist
    pub async fn set_price_alert(
        &self,
        user_id: &str,
        listing_id: &str,
        price: u64,
    ) -> StoreResult<Option<WishlistItem>> {
        let item = self
            .mutate(user_id, |wishlist| {
                let item = wishlist.set_price_alert(listing_id, price);
                let modified = item.is_some();
                (item, modified)
            })
            .await?;

        if item.is_some() {
            info!(
                "User {} set price alert {} on {}",
                user_id, price, listing_id
            );
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{KeyValueStore, memory::MemoryStore};

    #[tokio::test]
    async fn test_membership_after_add_and_remove() -> StoreResult<()> {
        let repository = WishlistRepository::new(Arc::new(MemoryStore::new()));

        for listing_id in ["listing1", "listing-abc", "does-not-matter"] {
            repository.add("user1", listing_id, None).await?;
            assert!(repository.contains("user1", listing_id).await?);

            assert!(repository.remove("user1", listing_id).await?);
            assert!(!repository.contains("user1", listing_id).await?);
        }
        assert!(!repository.remove("user1", "listing1").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_no_duplicates_and_per_user_isolation() -> StoreResult<()> {
        let repository = WishlistRepository::new(Arc::new(MemoryStore::new()));

        let (_, created) = repository.add("user1", "listing2", None).await?;
        assert!(created);
        let (_, created) = repository.add("user1", "listing2", Some(1)).await?;
        assert!(!created);

        assert_eq!(repository.items("user1").await?.len(), 1);
        assert!(repository.items("user2").await?.is_empty());
        assert!(!repository.contains("user2", "listing2").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_persisted_blob_reloads() -> StoreResult<()> {
        let store = Arc::new(MemoryStore::new());
        let repository = WishlistRepository::new(store.clone());
        repository.add("user1", "listing1", None).await?;
        repository.add("user1", "listing6", None).await?;
        let alerted = repository
            .set_price_alert("user1", "listing6", 17999)
            .await?
            .unwrap();

        let raw = store.get("phoneflip_wishlist_user1").await?.unwrap();
        assert!(raw.contains("\"priceAlert\":17999"));

        let reloaded = WishlistRepository::new(store.clone());
        let items = reloaded.items("user1").await?;
        assert_eq!(items, repository.items("user1").await?);
        assert_eq!(items[1], alerted);
        Ok(())
    }

    #[tokio::test]
    async fn test_alert_on_missing_item() -> StoreResult<()> {
        let store = Arc::new(MemoryStore::new());
        let repository = WishlistRepository::new(store.clone());

        assert!(
            repository
                .set_price_alert("user1", "listing1", 100)
                .await?
                .is_none()
        );
        // Nothing was written for a no-op
        assert!(store.get("phoneflip_wishlist_user1").await?.is_none());
        Ok(())
    }
}
