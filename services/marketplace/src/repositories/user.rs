//! User directory

use std::sync::Arc;

use common::{SharedStore, StoreResult, load_json, save_json};
use tokio::sync::RwLock;
use tracing::info;

use super::USERS_KEY;
use crate::models::User;
use crate::seed;

/// Every user the marketplace knows about, used to show listing sellers
#[derive(Clone)]
pub struct UserDirectory {
    store: SharedStore,
    users: Arc<RwLock<Vec<User>>>,
}

impl UserDirectory {
    /// Load the directory, seeding the demo sellers if the store has none
    pub async fn load(store: SharedStore) -> StoreResult<Self> {
        let users = match load_json::<Vec<User>>(store.as_ref(), USERS_KEY).await? {
            Some(users) => users,
            None => {
                let users = seed::mock_users();
                save_json(store.as_ref(), USERS_KEY, &users).await?;
                info!("Seeded {} demo users", users.len());
                users
            }
        };

        Ok(Self {
            store,
            users: Arc::new(RwLock::new(users)),
        })
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    /// Insert `user`, replacing any existing user with the same ID
    pub async fn upsert(&self, user: &User) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let mut updated = users.clone();
        match updated.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => updated.push(user.clone()),
        }

        save_json(self.store.as_ref(), USERS_KEY, &updated).await?;
        *users = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::memory::MemoryStore;

    #[tokio::test]
    async fn test_seeded_sellers_and_upsert() -> StoreResult<()> {
        let store = Arc::new(MemoryStore::new());
        let directory = UserDirectory::load(store.clone()).await?;

        assert_eq!(
            directory.find_by_id("user2").await.map(|u| u.name),
            Some("Priya Singh".to_string())
        );

        let mut user = seed::default_user();
        user.id = "user-new".to_string();
        directory.upsert(&user).await?;
        user.name = "Renamed".to_string();
        directory.upsert(&user).await?;

        let reloaded = UserDirectory::load(store.clone()).await?;
        assert_eq!(reloaded.find_by_id("user-new").await, Some(user));
        Ok(())
    }
}
