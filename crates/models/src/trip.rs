use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce;

/// A saved snapshot of a generated itinerary plus the preferences that
/// produced it. Stored newest-first in the trips document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub destination: String,
    pub days: u32,
    pub total_cost: f64,
    pub total_places: f64,
    pub plan: TripPlan,
    pub preferences: TripPreferences,
}

/// Generated plan as handed over by the itinerary engine. Only the fields the
/// store reads are typed; everything else passes through untouched via the
/// flattened map.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_places: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User-selected interests, destination and day count from the planning form.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Number or numeric string, the way form data arrives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What a caller hands to `TripStore::save`. Saving is a no-op unless both
/// halves are present.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TripDraft {
    pub plan: Option<TripPlan>,
    pub preferences: Option<TripPreferences>,
}

impl Trip {
    /// Build the persisted record from a complete draft, filling the
    /// documented defaults: destination falls back to `"Destination"`, the
    /// day count to the itinerary length and then 1, amounts to 0.
    pub fn assemble(
        id: String,
        created_at: DateTime<Utc>,
        plan: TripPlan,
        preferences: TripPreferences,
    ) -> Self {
        let destination = preferences
            .destination
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "Destination".to_string());
        let days = coerce::positive_int(preferences.days.as_ref())
            .or_else(|| itinerary_days(&plan).filter(|n| *n >= 1).map(|n| n as u32))
            .unwrap_or(1);
        let total_cost = coerce::non_negative_or_zero(plan.total_cost.as_ref());
        let total_places = match coerce::as_number(plan.total_places.as_ref()) {
            Some(n) if n > 0.0 => n,
            _ => planned_activity_count(&plan) as f64,
        };
        Self { id, created_at, destination, days, total_cost, total_places, plan, preferences }
    }
}

/// Number of day entries in the plan's itinerary, when it is an array.
fn itinerary_days(plan: &TripPlan) -> Option<usize> {
    Some(plan.itinerary.as_ref()?.as_array()?.len())
}

/// Summed `activities` lengths across itinerary days. The dashboard counter
/// falls back to this when the plan carries no usable total.
fn planned_activity_count(plan: &TripPlan) -> usize {
    plan.itinerary
        .as_ref()
        .and_then(Value::as_array)
        .map(|days| {
            days.iter()
                .filter_map(|day| Some(day.get("activities")?.as_array()?.len()))
                .sum()
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn assemble_fills_documented_defaults() {
        let trip = Trip::assemble(
            "t-1".into(),
            fixed_now(),
            TripPlan::default(),
            TripPreferences::default(),
        );
        assert_eq!(trip.destination, "Destination");
        assert_eq!(trip.days, 1);
        assert_eq!(trip.total_cost, 0.0);
        assert_eq!(trip.total_places, 0.0);
    }

    #[test]
    fn day_count_prefers_preferences_then_itinerary_length() {
        let plan = TripPlan {
            itinerary: Some(json!([{ "day": 1 }, { "day": 2 }, { "day": 3 }])),
            ..Default::default()
        };
        let from_itinerary =
            Trip::assemble("t-1".into(), fixed_now(), plan.clone(), TripPreferences::default());
        assert_eq!(from_itinerary.days, 3);

        let prefs = TripPreferences { days: Some(json!("5")), ..Default::default() };
        let from_prefs = Trip::assemble("t-2".into(), fixed_now(), plan, prefs);
        assert_eq!(from_prefs.days, 5);
    }

    #[test]
    fn empty_itinerary_still_means_one_day() {
        let plan = TripPlan { itinerary: Some(json!([])), ..Default::default() };
        let trip = Trip::assemble("t-1".into(), fixed_now(), plan, TripPreferences::default());
        assert_eq!(trip.days, 1);
    }

    #[test]
    fn place_total_falls_back_to_summed_activities() {
        let plan = TripPlan {
            itinerary: Some(json!([
                { "day": 1, "activities": [{}, {}] },
                { "day": 2, "activities": [{}] },
                { "day": 3 },
            ])),
            ..Default::default()
        };
        let trip = Trip::assemble("t-1".into(), fixed_now(), plan, TripPreferences::default());
        assert_eq!(trip.total_places, 3.0);

        let explicit = TripPlan { total_places: Some(json!(18)), ..Default::default() };
        let trip = Trip::assemble("t-2".into(), fixed_now(), explicit, TripPreferences::default());
        assert_eq!(trip.total_places, 18.0);
    }

    #[test]
    fn unknown_plan_fields_pass_through_serialization() {
        let plan: TripPlan = serde_json::from_value(json!({
            "totalCost": 42500,
            "costBreakdown": { "stay": 20000, "food": 9000 },
        }))
        .unwrap();
        assert_eq!(plan.extra["costBreakdown"]["stay"], json!(20000));

        let back = serde_json::to_value(&plan).unwrap();
        assert_eq!(back["costBreakdown"]["food"], json!(9000));
        assert!(back.get("itinerary").is_none(), "absent fields stay absent");
    }

    #[test]
    fn persisted_layout_uses_camel_case_keys() {
        let trip = Trip::assemble(
            "1714564800000-ab12cd".into(),
            fixed_now(),
            TripPlan::default(),
            TripPreferences { destination: Some("Goa".into()), ..Default::default() },
        );
        let doc = serde_json::to_value(&trip).unwrap();
        for key in ["id", "createdAt", "destination", "days", "totalCost", "totalPlaces", "plan", "preferences"] {
            assert!(doc.get(key).is_some(), "missing key {key}");
        }
    }
}
