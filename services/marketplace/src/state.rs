//! Application state shared across handlers

use chrono::Utc;
use common::{SharedStore, StoreResult};

use crate::repositories::{ListingRepository, UserDirectory, WishlistRepository};
use crate::session::SessionManager;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub listings: ListingRepository,
    pub wishlists: WishlistRepository,
    pub users: UserDirectory,
    pub sessions: SessionManager,
}

impl AppState {
    /// Load every repository from `store`, seeding demo data on first run
    pub async fn initialize(store: SharedStore, dev_mode: bool) -> StoreResult<Self> {
        let listings = ListingRepository::load(store.clone(), Utc::now()).await?;
        let users = UserDirectory::load(store.clone()).await?;
        let wishlists = WishlistRepository::new(store.clone());
        let sessions = SessionManager::new(store.clone(), users.clone(), dev_mode);

        Ok(Self {
            store,
            listings,
            wishlists,
            users,
            sessions,
        })
    }
}
