//! Listing repository

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{SharedStore, StoreResult, load_json, save_json};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::LISTINGS_KEY;
use crate::models::{Listing, ListingFilters, ListingStatus, NewListing, SortOption, UpdateListing};
use crate::{query, seed};

/// Listing repository
#[derive(Clone)]
pub struct ListingRepository {
    store: SharedStore,
    listings: Arc<RwLock<Vec<Listing>>>,
}

impl ListingRepository {
    /// Load the catalog, seeding the demo listings if the store has none
    pub async fn load(store: SharedStore, now: DateTime<Utc>) -> StoreResult<Self> {
        let listings = match load_json::<Vec<Listing>>(store.as_ref(), LISTINGS_KEY).await? {
            Some(listings) => {
                info!("Loaded {} listings from store", listings.len());
                listings
            }
            None => {
                let listings = seed::mock_listings(now);
                save_json(store.as_ref(), LISTINGS_KEY, &listings).await?;
                info!("Seeded {} demo listings", listings.len());
                listings
            }
        };

        Ok(Self {
            store,
            listings: Arc::new(RwLock::new(listings)),
        })
    }

    /// All listings in catalog order
    pub async fn all(&self) -> Vec<Listing> {
        self.listings.read().await.clone()
    }

    /// Find a listing by ID
    pub async fn find_by_id(&self, id: &str) -> Option<Listing> {
        self.listings
            .read()
            .await
            .iter()
            .find(|listing| listing.id == id)
            .cloned()
    }

    /// Listings posted by `seller_id`
    pub async fn by_seller(&self, seller_id: &str) -> Vec<Listing> {
        self.listings
            .read()
            .await
            .iter()
            .filter(|listing| listing.seller_id == seller_id)
            .cloned()
            .collect()
    }

    /// The first `limit` listings in catalog order
    pub async fn featured(&self, limit: usize) -> Vec<Listing> {
        self.listings
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Up to `limit` other listings of the same brand
    pub async fn similar(&self, listing: &Listing, limit: usize) -> Vec<Listing> {
        self.listings
            .read()
            .await
            .iter()
            .filter(|other| other.brand == listing.brand && other.id != listing.id)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Filtered and sorted view of the catalog
    pub async fn query(&self, filters: &ListingFilters, sort: SortOption) -> Vec<Listing> {
        query::apply(&self.listings.read().await, filters, sort)
    }

    /// Create a new active listing for `seller_id`
    pub async fn create(&self, seller_id: &str, new_listing: NewListing) -> StoreResult<Listing> {
        let now = Utc::now();
        let listing = Listing {
            id: format!("listing-{}", Uuid::new_v4().simple()),
            title: new_listing.title,
            brand: new_listing.brand,
            model: new_listing.model,
            description: new_listing.description,
            condition: new_listing.condition,
            price: new_listing.price,
            original_price: new_listing.original_price,
            images: new_listing.images,
            seller_id: seller_id.to_string(),
            location: new_listing.location,
            status: ListingStatus::Active,
            created_at: now,
            updated_at: now,
        };

        let mut listings = self.listings.write().await;
        let mut updated = listings.clone();
        updated.push(listing.clone());
        save_json(self.store.as_ref(), LISTINGS_KEY, &updated).await?;
        *listings = updated;

        info!("Created listing {} for seller {}", listing.id, seller_id);
        Ok(listing)
    }

    /// Merge `update` into listing `id` and stamp `updatedAt`
    pub async fn update(&self, id: &str, update: UpdateListing) -> StoreResult<Option<Listing>> {
        let mut listings = self.listings.write().await;
        let Some(index) = listings.iter().position(|listing| listing.id == id) else {
            return Ok(None);
        };

        let mut updated = listings.clone();
        let listing = &mut updated[index];
        listing.apply(update);
        listing.updated_at = Utc::now();
        let listing = listing.clone();

        save_json(self.store.as_ref(), LISTINGS_KEY, &updated).await?;
        *listings = updated;

        info!("Updated listing {}", id);
        Ok(Some(listing))
    }

    /// Delete listing `id`; `false` when it does not exist
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut listings = self.listings.write().await;
        let updated: Vec<Listing> = listings
            .iter()
            .filter(|listing| listing.id != id)
            .cloned()
            .collect();

        if updated.len() == listings.len() {
            return Ok(false);
        }

        save_json(self.store.as_ref(), LISTINGS_KEY, &updated).await?;
        *listings = updated;

        info!("Deleted listing {}", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;
    use common::{KeyValueStore, memory::MemoryStore};

    async fn repository() -> (Arc<MemoryStore>, ListingRepository) {
        let store = Arc::new(MemoryStore::new());
        let repository = ListingRepository::load(store.clone(), Utc::now())
            .await
            .unwrap();
        (store, repository)
    }

    fn new_listing() -> NewListing {
        NewListing {
            title: "Galaxy S23 with box and bill".to_string(),
            brand: "Samsung".to_string(),
            model: "Galaxy S23".to_string(),
            description: "Barely used, always kept in a case.".to_string(),
            condition: Condition::LikeNew,
            price: 54999,
            original_price: Some(74999),
            location: "Pune, Maharashtra".to_string(),
            images: vec!["https://example.com/s23.jpg".to_string()],
        }
    }

    #[tokio::test]
    async fn test_load_seeds_and_persists_catalog() {
        let (store, repository) = repository().await;
        assert_eq!(repository.all().await.len(), 8);

        let stored: Vec<Listing> = load_json(store.as_ref(), LISTINGS_KEY)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, repository.all().await);
    }

    #[tokio::test]
    async fn test_reload_rehydrates_identical_listings() {
        let (store, repository) = repository().await;
        let created = repository.create("user2", new_listing()).await.unwrap();

        let reloaded = ListingRepository::load(store.clone(), Utc::now())
            .await
            .unwrap();
        assert_eq!(reloaded.all().await, repository.all().await);
        assert_eq!(
            reloaded.find_by_id(&created.id).await.unwrap().created_at,
            created.created_at
        );
    }

    #[tokio::test]
    async fn test_create_appends_active_listing() {
        let (_, repository) = repository().await;
        let created = repository.create("user2", new_listing()).await.unwrap();

        assert!(created.id.starts_with("listing-"));
        assert_eq!(created.status, ListingStatus::Active);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(repository.all().await.last(), Some(&created));
        assert_eq!(repository.by_seller("user2").await.len(), 4);
    }

    #[tokio::test]
    async fn test_update_overwrites_timestamp() {
        let (_, repository) = repository().await;
        let before = repository.find_by_id("listing4").await.unwrap();

        let updated = repository
            .update(
                "listing4",
                UpdateListing {
                    price: Some(35999),
                    ..UpdateListing::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.price, 35999);
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at > before.updated_at);
        assert!(
            repository
                .update("missing", UpdateListing::default())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_reports_absence() {
        let (store, repository) = repository().await;
        assert!(repository.delete("listing8").await.unwrap());
        assert!(!repository.delete("listing8").await.unwrap());
        assert!(repository.find_by_id("listing8").await.is_none());

        let raw = store.get(LISTINGS_KEY).await.unwrap().unwrap();
        assert!(!raw.contains("\"listing8\""));
    }

    #[tokio::test]
    async fn test_similar_and_featured() {
        let (_, repository) = repository().await;
        let listing = repository.find_by_id("listing1").await.unwrap();

        let similar = repository.similar(&listing, 4).await;
        let ids: Vec<&str> = similar.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["listing5"]);

        let featured = repository.featured(4).await;
        let ids: Vec<&str> = featured.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["listing1", "listing2", "listing3", "listing4"]);
    }
}
