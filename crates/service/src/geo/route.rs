use std::time::Duration;

use configs::GeoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::geo::{GeoPoint, HTTP};

/// Driving route ready for rendering: polyline as `(lat, lon)` pairs,
/// distance in km to one decimal, duration in whole minutes.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSummary {
    pub coords: Vec<(f64, f64)>,
    pub distance_km: f64,
    pub duration_min: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON order: `[lon, lat]`.
    coordinates: Vec<[f64; 2]>,
}

/// Road route between two points, or `None` on any failure.
pub async fn driving_route(cfg: &GeoConfig, from: &GeoPoint, to: &GeoPoint) -> Option<RouteSummary> {
    let url = format!(
        "{}/route/v1/driving/{},{};{},{}",
        cfg.osrm_url, from.lon, from.lat, to.lon, to.lat
    );
    let response = match HTTP
        .get(&url)
        .query(&[("overview", "full"), ("geometries", "geojson")])
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "route request failed");
            return None;
        }
    };

    let payload: OsrmResponse = match response.json().await {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "route response not decodable");
            return None;
        }
    };
    summarize(payload)
}

/// Keep the first route when the router reports success; swap the GeoJSON
/// coordinate order for rendering.
pub(crate) fn summarize(payload: OsrmResponse) -> Option<RouteSummary> {
    if payload.code != "Ok" {
        return None;
    }
    let route = payload.routes.into_iter().next()?;
    let coords = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| (lat, lon))
        .collect();
    Some(RouteSummary {
        coords,
        distance_km: (route.distance / 100.0).round() / 10.0,
        duration_min: (route.duration / 60.0).round() as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(raw: &str) -> OsrmResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn summary_swaps_coordinates_and_rounds_units() {
        let summary = summarize(payload(
            r#"{
                "code": "Ok",
                "routes": [{
                    "distance": 12345.0,
                    "duration": 1890.0,
                    "geometry": { "coordinates": [[78.04, 27.17], [78.05, 27.18]] }
                }]
            }"#,
        ))
        .expect("summary");

        assert_eq!(summary.coords, vec![(27.17, 78.04), (27.18, 78.05)]);
        assert_eq!(summary.distance_km, 12.3);
        assert_eq!(summary.duration_min, 32); // 1890 s -> 31.5 min, rounded
    }

    #[test]
    fn error_codes_and_empty_route_lists_yield_none() {
        assert!(summarize(payload(r#"{ "code": "NoRoute", "routes": [] }"#)).is_none());
        assert!(summarize(payload(r#"{ "code": "Ok", "routes": [] }"#)).is_none());
        assert!(summarize(payload(r#"{ "code": "InvalidQuery" }"#)).is_none());
    }
}
