//! API models for persisted entities and request/response payloads

pub mod filters;
pub mod listing;
pub mod pages;
pub mod user;
pub mod wishlist;

pub use filters::{ListingFilters, SortOption};
pub use listing::{Condition, Listing, ListingDetailResponse, ListingStatus, NewListing, UpdateListing};
pub use pages::{BrowseResponse, CatalogOptions, HomeResponse, ProfileResponse, WishlistStatus};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use wishlist::{
    AddToWishlistRequest, PriceAlertRequest, Wishlist, WishlistEntry, WishlistItem,
};
