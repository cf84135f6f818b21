//! Wiring helpers for hosts embedding the stores.

use configs::AppConfig;

use crate::errors::StoreError;
use crate::favorites::FavoriteStore;
use crate::storage::FileMedium;
use crate::trips::TripStore;

/// Both repositories over one shared medium.
pub struct Stores {
    pub trips: TripStore,
    pub favorites: FavoriteStore,
}

/// Open the stores the way a host embeds them: a single file medium rooted
/// at the configured data directory.
pub async fn open_stores(cfg: &AppConfig) -> Result<Stores, StoreError> {
    let medium = FileMedium::new(cfg.storage.data_dir.as_str()).await?;
    Ok(Stores {
        trips: TripStore::new(medium.clone()),
        favorites: FavoriteStore::new(medium),
    })
}
