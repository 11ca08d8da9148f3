//! Integration tests for the activities lookup and views using wiremock.
//!
//! Weather and Geoapify are served by separate mock servers so each call can
//! fail or stall independently.

use std::time::Duration;

use cloudcue_activities::{FavoritesStore, FileStorage, MemoryStorage};
use cloudcue_core::{AppError, Config, WeatherError};
use cloudcue_ui::{ActivitiesService, Frontend, Route, SaveOutcome};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Servers {
    weather: MockServer,
    geo: MockServer,
}

impl Servers {
    async fn start() -> Self {
        Self {
            weather: MockServer::start().await,
            geo: MockServer::start().await,
        }
    }

    fn config(&self) -> Config {
        let mut config = Config::default();
        config.api.weather_base_url = self.weather.uri();
        config.api.weather_api_key = "weather_key".into();
        config.api.geoapify_base_url = self.geo.uri();
        config.api.geoapify_api_key = "geo_key".into();
        config.search.request_timeout_secs = 5;
        config
    }

    fn service(&self) -> ActivitiesService {
        ActivitiesService::from_config(&self.config()).unwrap()
    }
}

fn forecast_body(condition: &str, chance_of_rain: u8) -> serde_json::Value {
    json!({
        "location": {"name": "Vancouver", "region": "British Columbia", "country": "Canada"},
        "forecast": {
            "forecastday": [
                {
                    "date": "2025-08-05",
                    "day": {
                        "avgtemp_c": 19.4,
                        "maxtemp_c": 23.1,
                        "mintemp_c": 14.8,
                        "condition": {"text": condition},
                        "daily_chance_of_rain": chance_of_rain
                    }
                },
                {
                    "date": "2025-08-06",
                    "day": {
                        "avgtemp_c": 17.0,
                        "maxtemp_c": 20.2,
                        "mintemp_c": 13.5,
                        "condition": {"text": "Light rain"},
                        "daily_chance_of_rain": 85
                    }
                }
            ]
        }
    })
}

fn geocode_body() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "lat": 49.2608724,
                    "lon": -123.113952,
                    "formatted": "Vancouver, BC, Canada"
                }
            }
        ]
    })
}

fn places_body() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "name": "Stanley Park",
                    "place_id": "51park",
                    "categories": ["leisure", "leisure.park"],
                    "address_line2": "Vancouver, BC V6G 1Z4, Canada"
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "name": "Vancouver Art Gallery",
                    "place_id": "51gallery",
                    "categories": ["entertainment", "entertainment.museum"],
                    "city": "Vancouver"
                }
            }
        ]
    })
}

async fn mount_weather(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "Vancouver"))
        .and(query_param("key", "weather_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_geocode(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .and(query_param("text", "Vancouver"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_renders_weather_outfit_and_activities() {
    let servers = Servers::start().await;
    mount_weather(&servers.weather, forecast_body("Partly cloudy", 10)).await;
    mount_geocode(&servers.geo).await;
    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .and(query_param("apiKey", "geo_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body()))
        .expect(1)
        .mount(&servers.geo)
        .await;

    let frontend = Frontend::new(servers.service(), FavoritesStore::load(MemoryStorage::new()));
    let route = Route::from_search_input("  Vancouver ").unwrap();
    let out = frontend.open(&route, None).await;

    assert!(out.starts_with("Activities in Vancouver"));
    assert!(out.contains("Partly cloudy"));
    assert!(out.contains("Light rain"));
    assert!(out.contains("🧢 Light jacket just in case"));
    assert!(out.contains("Stanley Park"));
    assert!(out.contains("Vancouver Art Gallery"));
    assert!(!out.contains("⚠️"));
}

#[tokio::test]
async fn test_wet_day_requests_indoor_categories() {
    let servers = Servers::start().await;
    mount_weather(&servers.weather, forecast_body("Heavy rain", 90)).await;
    mount_geocode(&servers.geo).await;
    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .and(query_param(
            "categories",
            cloudcue_activities::ActivityPlan::Indoor.categories_param(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body()))
        .expect(1)
        .mount(&servers.geo)
        .await;

    let page = servers.service().search("Vancouver").await.unwrap();
    assert_eq!(page.plan, cloudcue_activities::ActivityPlan::Indoor);
}

#[tokio::test]
async fn test_zero_places_renders_empty_state() {
    let servers = Servers::start().await;
    mount_weather(&servers.weather, forecast_body("Sunny", 0)).await;
    mount_geocode(&servers.geo).await;
    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"type": "FeatureCollection", "features": []})),
        )
        .mount(&servers.geo)
        .await;

    let frontend = Frontend::new(servers.service(), FavoritesStore::load(MemoryStorage::new()));
    let out = frontend
        .open(&Route::parse("/activities?city=Vancouver").unwrap(), None)
        .await;

    assert!(out.contains("🔍 No activities found near Vancouver"));
    assert!(!out.contains("⚠️"));
}

#[tokio::test]
async fn test_first_failure_is_the_only_error_shown() {
    let servers = Servers::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 9999, "message": "Internal application error."}
        })))
        .mount(&servers.weather)
        .await;

    // Geocoding fails too, but well after the weather call
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_json(json!({"message": "Bad gateway"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&servers.geo)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body()))
        .expect(0)
        .mount(&servers.geo)
        .await;

    let frontend = Frontend::new(servers.service(), FavoritesStore::load(MemoryStorage::new()));
    let result = frontend.search("Vancouver").await;

    let err = result.as_ref().unwrap_err();
    assert!(matches!(err, AppError::Weather(WeatherError::ApiError(_))));
    assert_eq!(err.detail(), "Weather API error (500): Internal application error.");

    let out = frontend.render_search("Vancouver", &result, None);
    assert_eq!(out.matches("⚠️").count(), 1);
    assert!(out.contains("Weather API error (500)"));
    assert!(!out.contains("Bad gateway"));
    assert!(out.contains("try a different city"));
}

#[tokio::test]
async fn test_geocode_failure_wins_when_it_happens_first() {
    let servers = Servers::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast_body("Sunny", 0))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&servers.weather)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"type": "FeatureCollection", "features": []})),
        )
        .mount(&servers.geo)
        .await;

    let err = servers.service().search("Atlantis").await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Weather(WeatherError::LocationNotFound(ref c)) if c == "Atlantis"
    ));
}

#[tokio::test]
async fn test_weather_unknown_location() {
    let servers = Servers::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 1006, "message": "No matching location found."}
        })))
        .mount(&servers.weather)
        .await;
    mount_geocode(&servers.geo).await;

    let frontend = Frontend::new(servers.service(), FavoritesStore::load(MemoryStorage::new()));
    let route = Route::from_search_input("Vancouver").unwrap();
    let out = frontend.open(&route, None).await;

    assert_eq!(out.matches("⚠️").count(), 1);
    assert!(out.contains("Location not found: Vancouver"));
}

#[tokio::test]
async fn test_saved_favorites_survive_restart() {
    let servers = Servers::start().await;
    mount_weather(&servers.weather, forecast_body("Sunny", 0)).await;
    mount_geocode(&servers.geo).await;
    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body()))
        .mount(&servers.geo)
        .await;

    let dir = tempfile::tempdir().unwrap();

    {
        let mut frontend = Frontend::new(
            servers.service(),
            FavoritesStore::load(FileStorage::new(dir.path())),
        );
        let page = frontend.search("Vancouver").await.unwrap();

        assert_eq!(frontend.save(&page, "51gallery").unwrap(), SaveOutcome::Added);
        assert_eq!(frontend.save(&page, "51gallery").unwrap(), SaveOutcome::AlreadySaved);
        assert_eq!(frontend.save(&page, "missing").unwrap(), SaveOutcome::NotInResults);

        let out = frontend.render_search("Vancouver", &Ok(page), None);
        assert_eq!(out.matches("❤️").count(), 1);
    }

    let reloaded = FavoritesStore::load(FileStorage::new(dir.path()));
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.is_favorite("51gallery"));

    let frontend = Frontend::new(servers.service(), reloaded);
    let out = frontend.open(&Route::Favorites, None).await;
    assert!(out.contains("Vancouver Art Gallery"));
    assert!(out.ends_with("1 Favorite"));
}
