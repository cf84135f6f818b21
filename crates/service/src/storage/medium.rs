use async_trait::async_trait;

use crate::errors::StoreError;

/// Trait abstraction for the host key/value document medium.
/// Implementations can be file-backed, in-memory, or absent entirely.
#[async_trait]
pub trait StorageMedium: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// The degraded mode for hosts without any persistence backend: every
/// operation reports [`StoreError::Unavailable`], which the stores turn into
/// empty reads and no-op writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMedium;

#[async_trait]
impl StorageMedium for NullMedium {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
