use std::sync::Arc;

use tracing::{debug, info, warn};

use models::favorite::{Favorite, PlaceInput};

pub use models::favorite::normalize;

use crate::storage::{JsonDocStore, StorageMedium};

/// Document key for the favorites array.
pub const FAVORITES_KEY: &str = "smart_travel_favorites_v1";

/// Newest-first cap; inserting beyond it evicts the oldest record.
const MAX_FAVORITES: usize = 200;

/// Repository of favorite places, unique by normalized id, newest first,
/// capped at 200 records. Storage failures never reach the caller.
#[derive(Clone)]
pub struct FavoriteStore {
    docs: JsonDocStore<Favorite>,
}

impl FavoriteStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { docs: JsonDocStore::new(medium, FAVORITES_KEY) }
    }

    /// All stored favorites, most recent first. Absent or malformed storage
    /// reads as empty.
    pub async fn list(&self) -> Vec<Favorite> {
        self.docs.load().await
    }

    /// Whether the place, once normalized, is currently a member.
    pub async fn is_favorite(&self, place: &PlaceInput) -> bool {
        let id = normalize(place).id;
        self.list().await.iter().any(|item| item.id == id)
    }

    /// Flip membership for the place and report the new state: `true` means
    /// now favorited. On an unavailable medium (or any failed write) nothing
    /// is mutated and the answer is `false`.
    pub async fn toggle(&self, place: &PlaceInput) -> bool {
        let normalized = normalize(place);
        let favorites = self.list().await;
        let exists = favorites.iter().any(|item| item.id == normalized.id);

        let next: Vec<Favorite> = if exists {
            favorites
                .into_iter()
                .filter(|item| item.id != normalized.id)
                .collect()
        } else {
            let mut next = favorites;
            next.insert(0, normalized.clone());
            if next.len() > MAX_FAVORITES {
                debug!(evicted = next.len() - MAX_FAVORITES, "favorite cap reached, evicting oldest");
                next.truncate(MAX_FAVORITES);
            }
            next
        };

        match self.docs.store(&next).await {
            Ok(()) => {
                info!(id = %normalized.id, favorited = !exists, "favorite toggled");
                !exists
            }
            Err(e) => {
                warn!(error = %e, id = %normalized.id, "favorite toggle failed");
                false
            }
        }
    }

    /// Remove by id. Unknown ids and unavailable media are silent no-ops.
    pub async fn remove(&self, favorite_id: &str) {
        let next: Vec<Favorite> = self
            .list()
            .await
            .into_iter()
            .filter(|item| item.id != favorite_id)
            .collect();
        if let Err(e) = self.docs.store(&next).await {
            warn!(error = %e, id = favorite_id, "favorite remove failed");
        }
    }
}
