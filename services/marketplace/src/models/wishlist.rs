//! Wishlist model
//!
//! A wishlist belongs to one user and is keyed by listing id: a listing
//! appears at most once, and removal and price alerts address the listing,
//! not the item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::listing::Listing;

/// Wishlist item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "listingID")]
    pub listing_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_alert: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// One user's wishlist, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    user_id: String,
    items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }

    /// Rebuild a wishlist from persisted items
    pub fn from_items(user_id: impl Into<String>, items: Vec<WishlistItem>) -> Self {
        Self {
            user_id: user_id.into(),
            items,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, listing_id: &str) -> bool {
        self.items.iter().any(|item| item.listing_id == listing_id)
    }

    pub fn get(&self, listing_id: &str) -> Option<&WishlistItem> {
        self.items.iter().find(|item| item.listing_id == listing_id)
    }

    /// Add `listing_id`, returning the item and whether it was created.
    ///
    /// An already-present listing is returned unchanged.
    pub fn add(
        &mut self,
        listing_id: &str,
        price_alert: Option<u64>,
        now: DateTime<Utc>,
    ) -> (WishlistItem, bool) {
        if let Some(existing) = self.get(listing_id) {
            return (existing.clone(), false);
        }

        let item = WishlistItem {
            id: format!("wishlist-{}", Uuid::new_v4().simple()),
            user_id: self.user_id.clone(),
            listing_id: listing_id.to_string(),
            price_alert,
            created_at: now,
        };
        self.items.push(item.clone());
        (item, true)
    }

    /// Remove `listing_id`; `false` when it was not present
    pub fn remove(&mut self, listing_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.listing_id != listing_id);
        self.items.len() != before
    }

    /// Set the price alert on `listing_id`, leaving every other field alone
    pub fn set_price_alert(&mut self, listing_id: &str, price: u64) -> Option<WishlistItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.listing_id == listing_id)?;
        item.price_alert = Some(price);
        Some(item.clone())
    }
}

/// Alert price suggested when the user does not pick one: 10% below `price`
pub fn suggested_price_alert(price: u64) -> u64 {
    (price as f64 * 0.9).round() as u64
}

/// Request to add a listing to the wishlist
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlistRequest {
    #[serde(rename = "listingID")]
    pub listing_id: String,
    #[serde(default)]
    pub price_alert: Option<u64>,
}

/// Request to set a price alert; no price means "suggest one"
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlertRequest {
    #[serde(default)]
    pub price_alert: Option<u64>,
}

/// Wishlist item joined with its listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(flatten)]
    pub item: WishlistItem,
    pub listing: Listing,
}
