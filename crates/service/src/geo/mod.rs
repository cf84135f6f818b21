//! Best-effort map enrichment
//!
//! Geocodes a destination and, when the caller's own position is known,
//! fetches a driving route. Both collaborators are free public instances
//! consumed as black boxes; every failure is logged and swallowed so the
//! host renders whatever subset arrived. No retries.

pub mod geocode;
pub mod route;

use configs::GeoConfig;
use once_cell::sync::Lazy;
use reqwest::Client;

pub use geocode::{geocode, GeocodeHit};
pub use route::{driving_route, RouteSummary};

/// WGS84 coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// What the enrichment flow managed to resolve for a place.
#[derive(Clone, Debug, Default)]
pub struct Enrichment {
    pub destination: Option<GeocodeHit>,
    pub route: Option<RouteSummary>,
}

// Nominatim's usage policy requires an identifying User-Agent; the shared
// client also keeps connection pooling across lookups.
pub(crate) static HTTP: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("smart-travel/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("default reqwest client")
});

/// Geocode `"{place}, {city}"` and, when both the hit and the user's position
/// are available, try the road route from the user to the destination.
pub async fn enrich(
    cfg: &GeoConfig,
    place_name: &str,
    city: &str,
    user: Option<GeoPoint>,
) -> Enrichment {
    let query = format!("{place_name}, {city}");
    let destination = geocode(cfg, &query).await;

    let route = match (&destination, user) {
        (Some(hit), Some(user)) => driving_route(cfg, &user, &hit.point).await,
        _ => None,
    };

    Enrichment { destination, route }
}
