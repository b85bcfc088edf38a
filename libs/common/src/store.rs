//! Key-value persistence port
//!
//! Application state is persisted as JSON blobs under fixed key names. The
//! [`KeyValueStore`] trait is the only thing the services depend on, so the
//! backing store (process memory, a directory of files, Redis) is chosen at
//! startup from [`StoreConfig`].

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::file_store::FileStore;
use crate::memory::MemoryStore;
use crate::redis_store::{RedisConfig, RedisStore};

/// A string-keyed blob store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the blob stored under `key`
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the blob stored under `key`
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> StoreResult<bool>;

    /// Short name of the backend, for logs
    fn backend_name(&self) -> &'static str;
}

/// Shared handle to a store
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Read and decode the JSON blob under `key`
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StoreResult<Option<T>> {
    match store.get(key).await? {
        Some(raw) => {
            debug!(key, bytes = raw.len(), "Loaded blob");
            Ok(Some(serde_json::from_str(&raw)?))
        }
        None => Ok(None),
    }
}

/// Encode `value` as JSON and write it under `key`
pub async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(value)?;
    debug!(key, bytes = raw.len(), "Saving blob");
    store.set(key, &raw).await
}

/// Which backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    File,
    Redis,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to use
    #[serde(default)]
    pub backend: StoreBackend,
    /// Directory for the `file` backend
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Connection URL for the `redis` backend
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
}

fn default_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_path(),
            redis_url: default_redis_url(),
        }
    }
}

/// Open the store selected by `config`
pub async fn open_store(config: &StoreConfig) -> StoreResult<SharedStore> {
    let store: SharedStore = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File => Arc::new(FileStore::new(config.path.clone()).await?),
        StoreBackend::Redis => {
            let redis_config = RedisConfig {
                url: config.redis_url.clone(),
            };
            Arc::new(RedisStore::new(&redis_config).await?)
        }
    };

    info!(backend = store.backend_name(), "Key-value store opened");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        name: String,
        tags: Vec<String>,
    }

    #[tokio::test]
    async fn test_json_helpers_round_trip() -> StoreResult<()> {
        let store = MemoryStore::new();
        let blob = Blob {
            name: "pixel".to_string(),
            tags: vec!["google".to_string(), "128gb".to_string()],
        };

        save_json(&store, "blob", &blob).await?;
        let loaded: Option<Blob> = load_json(&store, "blob").await?;
        assert_eq!(loaded, Some(blob));

        let missing: Option<Blob> = load_json(&store, "missing").await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_json_rejects_corrupt_blob() -> StoreResult<()> {
        let store = MemoryStore::new();
        store.set("blob", "{not json").await?;

        let result: StoreResult<Option<Blob>> = load_json(&store, "blob").await;
        assert!(matches!(
            result,
            Err(crate::error::StoreError::Serialization(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_open_store_defaults_to_memory() -> StoreResult<()> {
        let store = open_store(&StoreConfig::default()).await?;
        assert_eq!(store.backend_name(), "memory");
        assert!(store.health_check().await?);
        Ok(())
    }

    #[test]
    fn test_backend_names_deserialize_lowercase() {
        let backend: StoreBackend = serde_json::from_str("\"redis\"").unwrap();
        assert_eq!(backend, StoreBackend::Redis);
        assert!(serde_json::from_str::<StoreBackend>("\"postgres\"").is_err());
    }
}
