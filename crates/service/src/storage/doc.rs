use std::{marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::errors::StoreError;
use crate::storage::medium::StorageMedium;

/// Generic JSON array document store over a [`StorageMedium`].
///
/// Persists a `Vec<T>` as one JSON document under a fixed key with
/// whole-document reads and writes. A document that is absent, unreadable or
/// malformed reads as empty; "never written" and "corrupted" are deliberately
/// indistinguishable to the caller.
#[derive(Clone)]
pub struct JsonDocStore<T> {
    medium: Arc<dyn StorageMedium>,
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonDocStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(medium: Arc<dyn StorageMedium>, key: &'static str) -> Self {
        Self { medium, key, _record: PhantomData }
    }

    /// Read the whole document in stored order. Fails open: absent,
    /// unreadable and malformed documents all read as empty.
    pub async fn load(&self) -> Vec<T> {
        let raw = match self.medium.get(self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                debug!(key = self.key, error = %e, "document read failed, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                debug!(key = self.key, error = %e, "document malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the whole document. Concurrent writers race: the last write
    /// wins and nothing merges.
    pub async fn store(&self, items: &[T]) -> Result<(), StoreError> {
        let data = serde_json::to_string(items).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.medium.set(self.key, data).await
    }
}
