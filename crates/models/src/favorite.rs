use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved reference to a single point-of-interest, deduplicated by name+city.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub name: String,
    pub city: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rating: Option<f64>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Loosely-shaped place as handed over by the host UI; every field optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Canonical favorite for a place input. The id is deterministic for a given
/// name+city pair, so the same place maps to the same record regardless of
/// insertion order; a caller-supplied id wins. `created_at` defaults to now.
pub fn normalize(place: &PlaceInput) -> Favorite {
    let name = non_empty(place.name.as_deref()).unwrap_or("Place").to_string();
    let city = non_empty(place.city.as_deref()).unwrap_or("India").to_string();
    let id = non_empty(place.id.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}__{}", slugify(&name), slugify(&city)));
    Favorite {
        id,
        name,
        city,
        image: place.image.clone().unwrap_or_default(),
        kind: non_empty(place.kind.as_deref()).unwrap_or("Attraction").to_string(),
        rating: place.rating,
        description: place.description.clone().unwrap_or_default(),
        created_at: place.created_at.unwrap_or_else(Utc::now),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Lowercased, hyphen-separated slug: non-alphanumeric runs collapse to a
/// single `-`, leading and trailing separators are dropped.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_sep = false;
    for ch in value.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(ch);
        } else {
            pending_sep = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("Taj Mahal"), "taj-mahal");
        assert_eq!(slugify("  Gateway of India!  "), "gateway-of-india");
        assert_eq!(slugify("Connaught Place, Block A-2"), "connaught-place-block-a-2");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn normalized_id_is_deterministic_across_other_fields() {
        let bare = PlaceInput {
            name: Some("Taj Mahal".into()),
            city: Some("Agra".into()),
            ..Default::default()
        };
        let decorated = PlaceInput {
            name: Some("Taj Mahal".into()),
            city: Some("Agra".into()),
            image: Some("https://img.example/taj.jpg".into()),
            rating: Some(4.9),
            description: Some("Ivory-white marble mausoleum".into()),
            ..Default::default()
        };
        assert_eq!(normalize(&bare).id, "taj-mahal__agra");
        assert_eq!(normalize(&bare).id, normalize(&decorated).id);
    }

    #[test]
    fn caller_supplied_id_wins_over_derived() {
        let place = PlaceInput {
            id: Some("poi-42".into()),
            name: Some("Taj Mahal".into()),
            city: Some("Agra".into()),
            ..Default::default()
        };
        assert_eq!(normalize(&place).id, "poi-42");
    }

    #[test]
    fn missing_fields_fill_documented_defaults() {
        let favorite = normalize(&PlaceInput::default());
        assert_eq!(favorite.id, "place__india");
        assert_eq!(favorite.name, "Place");
        assert_eq!(favorite.city, "India");
        assert_eq!(favorite.kind, "Attraction");
        assert_eq!(favorite.image, "");
        assert_eq!(favorite.description, "");
        assert_eq!(favorite.rating, None);
    }

    #[test]
    fn zero_rating_is_preserved_not_defaulted() {
        let place = PlaceInput { rating: Some(0.0), ..Default::default() };
        assert_eq!(normalize(&place).rating, Some(0.0));
    }

    #[test]
    fn persisted_layout_keeps_type_key_and_null_rating() {
        let doc = serde_json::to_value(normalize(&PlaceInput::default())).unwrap();
        assert_eq!(doc["type"], json!("Attraction"));
        assert_eq!(doc["rating"], json!(null));
        assert!(doc.get("createdAt").is_some());
        assert!(doc.get("kind").is_none());
    }
}
