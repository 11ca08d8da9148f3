//! Geoapify places client.

use std::sync::Arc;
use std::time::Duration;

use cloudcue_weather::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::classify::classify_categories;
use crate::plan::ActivityPlan;
use crate::types::Activity;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Places request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Places API key was rejected")]
    InvalidApiKey,

    #[error("Places API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Places response could not be parsed: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<PlaceFeature>,
}

#[derive(Debug, Deserialize)]
struct PlaceFeature {
    #[serde(default)]
    properties: PlaceProperties,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceProperties {
    name: Option<String>,
    place_id: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    formatted: Option<String>,
    address_line2: Option<String>,
    district: Option<String>,
    city: Option<String>,
    opening_hours: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    datasource: Option<Datasource>,
}

#[derive(Debug, Default, Deserialize)]
struct Datasource {
    #[serde(default)]
    raw: RawTags,
}

/// Selected OpenStreetMap tags passed through by Geoapify.
#[derive(Debug, Default, Deserialize)]
struct RawTags {
    description: Option<String>,
    stars: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GeoapifyErrorBody {
    message: Option<String>,
}

/// Rating from OSM `stars` when present, otherwise a stable pseudo-rating in
/// 3.5..=4.9 derived from the id.
fn rating_for(id: &str, stars: Option<&serde_json::Value>) -> f64 {
    let from_stars = stars.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    });
    if let Some(stars) = from_stars.filter(|s| *s > 0.0) {
        return stars.min(5.0);
    }

    let sum = id.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    3.5 + f64::from(sum % 15) / 10.0
}

/// FNV-1a, so synthesized ids stay the same across runs and releases.
fn stable_hash(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// Id for a place Geoapify sent without `place_id`, derived from its name and
/// position (or address when there is no position).
fn synthesized_id(name: &str, props: &PlaceProperties) -> String {
    let anchor = match (props.lat, props.lon) {
        (Some(lat), Some(lon)) => format!("{:.5},{:.5}", lat, lon),
        _ => props
            .formatted
            .as_deref()
            .or(props.address_line2.as_deref())
            .or(props.city.as_deref())
            .unwrap_or_default()
            .to_lowercase(),
    };
    let key = format!("{}|{}", name.to_lowercase(), anchor);
    format!("place-{:016x}", stable_hash(&key))
}

fn to_activity(props: PlaceProperties, index: usize, near: &Coordinates) -> Option<Activity> {
    let name = props.name.clone().map(|n| n.trim().to_string()).filter(|n| !n.is_empty())?;
    let id = match props.place_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => synthesized_id(&name, &props),
    };

    let display = classify_categories(props.categories.as_slice(), &name, index);

    let location = props
        .address_line2
        .or(props.formatted)
        .or_else(|| props.city.clone())
        .unwrap_or_else(|| near.formatted.clone());

    let area = props
        .district
        .or(props.city)
        .unwrap_or_else(|| near.formatted.clone());

    let raw = props.datasource.map(|d| d.raw).unwrap_or_default();
    let rating = rating_for(&id, raw.stars.as_ref());

    let mut description = match raw.description.filter(|d| !d.trim().is_empty()) {
        Some(text) => text,
        None => format!("{} in {}.", display.category, area),
    };
    if let Some(hours) = props.opening_hours {
        description.push_str(&format!(" Open {}.", hours));
    }

    Some(Activity {
        id,
        name,
        location,
        category: display.category,
        rating: (rating * 10.0).round() / 10.0,
        description,
        image: display.emoji,
        tags: display.tags,
    })
}

#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, PlacesError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Search for places around `near` and turn them into activities.
    ///
    /// Unnamed places are skipped. An empty result is not an error.
    #[instrument(skip(self, near), fields(lat = near.latitude, lon = near.longitude), level = "info")]
    pub async fn search(
        &self,
        near: &Coordinates,
        plan: ActivityPlan,
        radius_meters: u32,
        limit: u32,
    ) -> Result<Vec<Activity>, PlacesError> {
        let url = format!(
            "{}/v2/places?categories={}&filter=circle:{},{},{}&bias=proximity:{},{}&limit={}&apiKey={}",
            self.base_url,
            plan.categories_param(),
            near.longitude,
            near.latitude,
            radius_meters,
            near.longitude,
            near.latitude,
            limit,
            urlencoding::encode(&self.api_key),
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(PlacesError::InvalidApiKey);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeoapifyErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(text);
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: PlacesResponse = response
            .json()
            .await
            .map_err(|e| PlacesError::Parse(e.to_string()))?;

        let total = body.features.len();
        let activities: Vec<Activity> = body
            .features
            .into_iter()
            .enumerate()
            .filter_map(|(i, f)| to_activity(f.properties, i, near))
            .collect();

        tracing::info!(
            features = total,
            activities = activities.len(),
            ?plan,
            "Fetched places"
        );
        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::FavoritesStore;
    use crate::storage::MemoryStorage;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn vancouver() -> Coordinates {
        Coordinates {
            latitude: 49.26,
            longitude: -123.11,
            formatted: "Vancouver, BC, Canada".to_string(),
        }
    }

    fn client(server: &MockServer) -> PlacesClient {
        PlacesClient::new(&server.uri(), "places_key", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_search_builds_activities() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/places"))
            .and(query_param("categories", ActivityPlan::Outdoor.categories_param()))
            .and(query_param("filter", "circle:-123.11,49.26,5000"))
            .and(query_param("limit", "12"))
            .and(query_param("apiKey", "places_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {
                            "name": "Stanley Park",
                            "place_id": "51abc",
                            "categories": ["leisure", "leisure.park"],
                            "address_line2": "Vancouver, BC V6G 1Z4, Canada",
                            "district": "West End",
                            "datasource": {"raw": {"description": "Urban park on a peninsula."}}
                        }
                    },
                    {
                        "type": "Feature",
                        "properties": {
                            "name": "Café Medina",
                            "categories": ["catering", "catering.cafe"],
                            "city": "Vancouver",
                            "opening_hours": "Mo-Su 08:00-15:00"
                        }
                    },
                    {
                        "type": "Feature",
                        "properties": {"categories": ["tourism.sights"]}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let activities = client(&server)
            .search(&vancouver(), ActivityPlan::Outdoor, 5000, 12)
            .await
            .unwrap();

        assert_eq!(activities.len(), 2);

        let park = &activities[0];
        assert_eq!(park.id, "51abc");
        assert_eq!(park.category, "Park");
        assert_eq!(park.image, "🌳");
        assert_eq!(park.location, "Vancouver, BC V6G 1Z4, Canada");
        assert_eq!(park.description, "Urban park on a peninsula.");
        assert!((3.5..=5.0).contains(&park.rating));

        let cafe = &activities[1];
        assert!(cafe.id.starts_with("place-"));
        assert_eq!(cafe.category, "Café");
        assert_eq!(cafe.location, "Vancouver");
        assert_eq!(cafe.description, "Café in Vancouver. Open Mo-Su 08:00-15:00.");
    }

    #[tokio::test]
    async fn test_zero_features_is_empty_not_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/places"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "FeatureCollection",
                "features": []
            })))
            .mount(&server)
            .await;

        let activities = client(&server)
            .search(&vancouver(), ActivityPlan::Indoor, 5000, 12)
            .await
            .unwrap();
        assert!(activities.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/places"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = client(&server)
            .search(&vancouver(), ActivityPlan::Indoor, 5000, 12)
            .await;
        assert!(matches!(result, Err(PlacesError::InvalidApiKey)));
    }

    #[tokio::test]
    async fn test_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/places"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "statusCode": 500,
                "message": "Internal error"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .search(&vancouver(), ActivityPlan::Outdoor, 5000, 12)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Places API error (500): Internal error");
    }

    #[test]
    fn test_rating_prefers_stars() {
        assert_eq!(rating_for("x", Some(&serde_json::json!(4))), 4.0);
        assert_eq!(rating_for("x", Some(&serde_json::json!("3.5"))), 3.5);
        assert_eq!(rating_for("x", Some(&serde_json::json!(7))), 5.0);
    }

    #[test]
    fn test_rating_is_stable_per_id() {
        let a = rating_for("51abc", None);
        assert_eq!(a, rating_for("51abc", None));
        assert!((3.5..=4.9).contains(&a));
    }

    fn place_without_id(name: &str, lat: f64, lon: f64) -> PlaceProperties {
        PlaceProperties {
            name: Some(name.to_string()),
            categories: vec!["leisure.park".to_string()],
            lat: Some(lat),
            lon: Some(lon),
            ..Default::default()
        }
    }

    #[test]
    fn test_places_without_place_id_get_distinct_ids_across_searches() {
        let paris = Coordinates {
            latitude: 48.85,
            longitude: 2.35,
            formatted: "Paris, France".to_string(),
        };
        let london = Coordinates {
            latitude: 51.5,
            longitude: -0.12,
            formatted: "London, United Kingdom".to_string(),
        };

        // Both are the first result of their own search
        let luxembourg =
            to_activity(place_without_id("Jardin du Luxembourg", 48.8462, 2.3372), 0, &paris)
                .unwrap();
        let hyde = to_activity(place_without_id("Hyde Park", 51.5073, -0.1657), 0, &london)
            .unwrap();
        assert_ne!(luxembourg.id, hyde.id);

        let mut favorites = FavoritesStore::load(MemoryStorage::new());
        assert!(favorites.add(luxembourg).unwrap());
        assert!(!favorites.is_favorite(&hyde.id));
        assert!(favorites.add(hyde).unwrap());
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_synthesized_id_is_stable_for_the_same_place() {
        let first = to_activity(place_without_id("Hyde Park", 51.5073, -0.1657), 0, &vancouver())
            .unwrap();
        let again = to_activity(place_without_id("Hyde Park", 51.5073, -0.1657), 7, &vancouver())
            .unwrap();
        assert_eq!(first.id, again.id);
    }

    #[test]
    fn test_synthesized_id_falls_back_to_address() {
        let a = PlaceProperties {
            name: Some("Corner Cafe".to_string()),
            formatted: Some("1 Main St, Vancouver".to_string()),
            ..Default::default()
        };
        let b = PlaceProperties {
            name: Some("Corner Cafe".to_string()),
            formatted: Some("9 Oak St, Vancouver".to_string()),
            ..Default::default()
        };
        assert_ne!(synthesized_id("Corner Cafe", &a), synthesized_id("Corner Cafe", &b));
    }
}
