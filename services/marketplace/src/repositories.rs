//! Repositories over the key-value store
//!
//! Each repository loads its blob once, serves reads from memory and writes
//! the whole blob back after every mutation. The new state is committed in
//! memory only after the write succeeds.

pub mod listing;
pub mod user;
pub mod wishlist;

pub use listing::ListingRepository;
pub use user::UserDirectory;
pub use wishlist::WishlistRepository;

/// Blob holding the listing catalog
pub const LISTINGS_KEY: &str = "phoneflip_listings";

/// Blob holding every known user
pub const USERS_KEY: &str = "phoneflip_users";

/// Blob holding one user's wishlist
pub fn wishlist_key(user_id: &str) -> String {
    format!("phoneflip_wishlist_{}", user_id)
}
