//! In-process store, the default for development and tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::store::KeyValueStore;

/// Store that keeps every blob in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() -> StoreResult<()> {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);

        store.set("phoneflip_listings", "[]").await?;
        assert_eq!(
            store.get("phoneflip_listings").await?,
            Some("[]".to_string())
        );

        store.set("phoneflip_listings", "[1]").await?;
        assert_eq!(
            store.get("phoneflip_listings").await?,
            Some("[1]".to_string())
        );
        assert_eq!(store.len().await, 1);

        store.delete("phoneflip_listings").await?;
        assert_eq!(store.get("phoneflip_listings").await?, None);

        // Deleting twice is fine
        store.delete("phoneflip_listings").await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_clones_share_entries() -> StoreResult<()> {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").await?;
        assert_eq!(other.get("k").await?, Some("v".to_string()));
        Ok(())
    }
}
