//! Response bodies for the page-level endpoints

use serde::Serialize;

use super::filters::{ListingFilters, SortOption};
use super::listing::{Condition, Listing};
use super::user::User;
use super::wishlist::{WishlistEntry, WishlistItem};

/// Landing page content
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub featured: Vec<Listing>,
    pub top_brands: Vec<&'static str>,
}

/// Browse page results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub results: Vec<Listing>,
    pub total: usize,
    pub filters: ListingFilters,
    pub filters_active: bool,
    pub sort: SortOption,
    /// Canonical query string reproducing this view
    pub query: String,
}

/// Profile page content
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub listings: Vec<Listing>,
    pub wishlist: Vec<WishlistEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortChoice {
    pub value: SortOption,
    pub label: &'static str,
}

/// Values offered by the browse page filter controls
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOptions {
    pub brands: Vec<&'static str>,
    pub conditions: Vec<Condition>,
    pub sort_options: Vec<SortChoice>,
}

impl CatalogOptions {
    pub fn new(brands: &[&'static str]) -> Self {
        Self {
            brands: brands.to_vec(),
            conditions: Condition::ALL.to_vec(),
            sort_options: SortOption::ALL
                .into_iter()
                .map(|value| SortChoice {
                    value,
                    label: value.label(),
                })
                .collect(),
        }
    }
}

/// Whether a listing is saved by the current user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistStatus {
    #[serde(rename = "listingID")]
    pub listing_id: String,
    pub in_wishlist: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<WishlistItem>,
}
