//! Directory-backed store
//!
//! Each key is written to `<dir>/<key>.json`. Writes go to a temporary file
//! first and are renamed into place, so a reader never sees a half-written
//! blob.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::KeyValueStore;

/// Store that keeps one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the directory at `base_path`
    pub async fn new(base_path: PathBuf) -> StoreResult<Self> {
        fs::create_dir_all(&base_path).await.map_err(|e| {
            StoreError::Configuration(format!(
                "Failed to create store directory '{}': {}",
                base_path.display(),
                e
            ))
        })?;

        info!(path = %base_path.display(), "File store initialized");
        Ok(Self { base_path })
    }

    /// Directory holding the blobs
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Map a key to its file, refusing anything that could leave the directory
    fn blob_path(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.blob_path(key)?;
        let tmp = self.base_path.join(format!(".{key}.json.tmp"));

        fs::write(&tmp, value).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            if let Err(cleanup) = fs::remove_file(&tmp).await {
                warn!(key, "Failed to remove temporary blob file: {}", cleanup);
            }
            return Err(e.into());
        }

        debug!(key, size = value.len(), "Wrote blob file");
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let path = self.blob_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(fs::metadata(&self.base_path).await?.is_dir())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() -> StoreResult<()> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path().to_path_buf()).await?;

        store.set("phoneflip_users", r#"[{"id":"user1"}]"#).await?;
        assert!(dir.path().join("phoneflip_users.json").exists());
        assert_eq!(
            store.get("phoneflip_users").await?,
            Some(r#"[{"id":"user1"}]"#.to_string())
        );

        store.delete("phoneflip_users").await?;
        assert_eq!(store.get("phoneflip_users").await?, None);
        store.delete("phoneflip_users").await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_blobs_survive_reopen() -> StoreResult<()> {
        let dir = tempfile::tempdir()?;
        {
            let store = FileStore::new(dir.path().to_path_buf()).await?;
            store.set("phoneflip_wishlist_user1", "[]").await?;
        }

        let reopened = FileStore::new(dir.path().to_path_buf()).await?;
        assert_eq!(
            reopened.get("phoneflip_wishlist_user1").await?,
            Some("[]".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() -> StoreResult<()> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path().to_path_buf()).await?;

        for key in ["../escape", "a/b", "", "dot.key"] {
            assert!(matches!(
                store.set(key, "x").await,
                Err(StoreError::InvalidKey(_))
            ));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_rename_leaves_no_temp_file() -> StoreResult<()> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path().to_path_buf()).await?;

        // A non-empty directory in the way makes the final rename fail
        let blocker = dir.path().join("phoneflip_listings.json");
        std::fs::create_dir(&blocker)?;
        std::fs::write(blocker.join("keep"), "x")?;

        assert!(matches!(
            store.set("phoneflip_listings", "[]").await,
            Err(StoreError::Io(_))
        ));
        assert!(!dir.path().join(".phoneflip_listings.json.tmp").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_creates_missing_directory() -> StoreResult<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("nested").join("store");
        let store = FileStore::new(nested.clone()).await?;
        assert!(store.health_check().await?);
        assert_eq!(store.base_path(), nested.as_path());
        Ok(())
    }
}
