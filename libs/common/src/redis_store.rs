//! Redis-backed store
//!
//! This module provides the Redis adapter for the key-value port. Blobs are
//! plain string values under the same key names the other backends use.

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use tracing::info;

use crate::error::StoreResult;
use crate::store::KeyValueStore;

/// Configuration for Redis connection
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://localhost:6379")
    pub url: String,
}

/// Redis client wrapper
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Initialize a new Redis client
    pub async fn new(config: &RedisConfig) -> StoreResult<Self> {
        let client = Client::open(config.url.clone())?;
        info!("Redis client initialized with URL: {}", config.url);
        Ok(RedisStore { client })
    }

    /// Get a multiplexed connection
    async fn get_connection(&self) -> StoreResult<redis::aio::MultiplexedConnection> {
        let conn = self.client.get_multiplexed_async_connection().await?;
        Ok(conn)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let mut conn = self.get_connection().await?;
        let _: u64 = conn.del(key).await?;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        let mut conn = self.get_connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong == "PONG")
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> RedisConfig {
        RedisConfig {
            url: "redis://localhost:6379".to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "needs a running Redis server"]
    async fn test_redis_connection() -> StoreResult<()> {
        let store = RedisStore::new(&local_config()).await?;
        assert!(store.health_check().await?);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "needs a running Redis server"]
    async fn test_set_get_delete() -> StoreResult<()> {
        let store = RedisStore::new(&local_config()).await?;

        let key = "phoneflip_test_key";
        store.set(key, "[]").await?;
        assert_eq!(store.get(key).await?, Some("[]".to_string()));

        store.delete(key).await?;
        assert_eq!(store.get(key).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_malformed_url() {
        let config = RedisConfig {
            url: "not a url".to_string(),
        };
        assert!(RedisStore::new(&config).await.is_err());
    }
}
