use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::fs;

use crate::errors::StoreError;
use crate::storage::medium::StorageMedium;

/// File-backed medium: each key maps to `<dir>/<key>.json`.
#[derive(Clone)]
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    /// Initialize under a data directory, creating it if missing.
    pub async fn new<P: Into<PathBuf>>(dir: P) -> Result<Arc<Self>, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(Arc::new(Self { dir }))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageMedium for FileMedium {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn file_medium_get_set_delete() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("travel_medium_{}", Uuid::new_v4()));
        let medium = FileMedium::new(&dir).await?;

        // missing key reads as absent, not an error
        assert!(medium.get("trips").await?.is_none());

        medium.set("trips", "[1,2,3]".into()).await?;
        assert_eq!(medium.get("trips").await?.as_deref(), Some("[1,2,3]"));

        // delete is idempotent
        medium.delete("trips").await?;
        medium.delete("trips").await?;
        assert!(medium.get("trips").await?.is_none());

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
