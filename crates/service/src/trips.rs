use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info, warn};

use models::trip::{Trip, TripDraft};

use crate::storage::{JsonDocStore, StorageMedium};

/// Document key for the saved-trips array.
pub const TRIPS_KEY: &str = "smart_travel_trips_v1";

/// Newest-first cap; inserting beyond it evicts the oldest record.
const MAX_TRIPS: usize = 30;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Repository of saved trips: newest first, capped at 30 records, persisted
/// as one JSON document. Storage failures never reach the caller.
#[derive(Clone)]
pub struct TripStore {
    docs: JsonDocStore<Trip>,
}

impl TripStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { docs: JsonDocStore::new(medium, TRIPS_KEY) }
    }

    /// All stored trips, most recent first. Absent or malformed storage reads
    /// as empty.
    pub async fn list(&self) -> Vec<Trip> {
        self.docs.load().await
    }

    /// Assemble and persist a new trip from the draft. Returns `None` without
    /// touching storage when the draft is missing its plan or preferences,
    /// and when the medium rejects the write.
    pub async fn save(&self, draft: TripDraft) -> Option<Trip> {
        let (plan, preferences) = match (draft.plan, draft.preferences) {
            (Some(plan), Some(preferences)) => (plan, preferences),
            _ => return None,
        };

        let trip = Trip::assemble(generate_trip_id(), Utc::now(), plan, preferences);
        let mut trips = self.list().await;
        trips.insert(0, trip.clone());
        if trips.len() > MAX_TRIPS {
            debug!(evicted = trips.len() - MAX_TRIPS, "trip cap reached, evicting oldest");
            trips.truncate(MAX_TRIPS);
        }

        match self.docs.store(&trips).await {
            Ok(()) => {
                info!(id = %trip.id, destination = %trip.destination, days = trip.days, "trip saved");
                Some(trip)
            }
            Err(e) => {
                warn!(error = %e, "trip save failed, dropping record");
                None
            }
        }
    }

    /// Remove the trip with the given id. Unknown ids and unavailable media
    /// are silent no-ops.
    pub async fn remove(&self, trip_id: &str) {
        let next: Vec<Trip> = self
            .list()
            .await
            .into_iter()
            .filter(|trip| trip.id != trip_id)
            .collect();
        if let Err(e) = self.docs.store(&next).await {
            warn!(error = %e, id = trip_id, "trip remove failed");
        }
    }

    /// Most recently saved trip, if any.
    pub async fn latest(&self) -> Option<Trip> {
        self.list().await.into_iter().next()
    }
}

/// `"{unix millis}-{6 base36 chars}"`, unique within the store.
fn generate_trip_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}
