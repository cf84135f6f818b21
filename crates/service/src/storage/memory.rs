use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::storage::medium::StorageMedium;

/// In-memory medium for tests and hosts that want ephemeral storage.
#[derive(Clone, Default)]
pub struct MemoryMedium {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryMedium {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Write a raw document directly, bypassing the stores. Lets tests seed
    /// corrupt or legacy payloads.
    pub async fn seed(&self, key: &str, value: &str) {
        self.inner.write().await.insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl StorageMedium for MemoryMedium {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.inner.write().await.remove(key);
        Ok(())
    }
}
