use std::time::Duration;

use configs::GeoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::geo::{GeoPoint, HTTP};

/// Resolved search hit: coordinates plus the display name the geocoder chose.
#[derive(Clone, Debug, PartialEq)]
pub struct GeocodeHit {
    pub point: GeoPoint,
    pub display_name: String,
}

/// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Resolve a free-form query to its best hit, or `None` on any failure.
pub async fn geocode(cfg: &GeoConfig, query: &str) -> Option<GeocodeHit> {
    let url = format!("{}/search", cfg.nominatim_url);
    let response = match HTTP
        .get(&url)
        .query(&[
            ("format", "json"),
            ("q", query),
            ("limit", "1"),
            ("countrycodes", cfg.country_code.as_str()),
        ])
        .header(reqwest::header::ACCEPT_LANGUAGE, "en")
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(query, error = %e, "geocode request failed");
            return None;
        }
    };

    let places: Vec<NominatimPlace> = match response.json().await {
        Ok(places) => places,
        Err(e) => {
            warn!(query, error = %e, "geocode response not decodable");
            return None;
        }
    };
    best_hit(places)
}

/// First hit with parseable coordinates.
pub(crate) fn best_hit(places: Vec<NominatimPlace>) -> Option<GeocodeHit> {
    let place = places.into_iter().next()?;
    let lat = place.lat.parse().ok()?;
    let lon = place.lon.parse().ok()?;
    Some(GeocodeHit { point: GeoPoint { lat, lon }, display_name: place.display_name })
}
