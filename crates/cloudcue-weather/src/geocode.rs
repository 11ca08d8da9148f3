//! Forward geocoding: convert a city name to coordinates.
//! Uses the Geoapify geocoding API.

use crate::types::{Coordinates, WeatherError};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

const SERVICE: &str = "Geocoding";
const USER_AGENT: &str = concat!("CloudCue/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    #[serde(default)]
    properties: GeocodeProperties,
    geometry: Option<PointGeometry>,
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeProperties {
    lat: Option<f64>,
    lon: Option<f64>,
    formatted: Option<String>,
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    /// GeoJSON order: [lon, lat]
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct GeoapifyErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl Geocoder {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| WeatherError::Network {
                service: SERVICE,
                source,
            })?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Geocode a city name to the coordinates of the best match.
    #[instrument(skip(self), level = "info")]
    pub async fn geocode(&self, city: &str) -> Result<Coordinates, WeatherError> {
        let url = format!(
            "{}/v1/geocode/search?text={}&apiKey={}",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key),
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| WeatherError::Network {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(WeatherError::InvalidApiKey { service: SERVICE });
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeoapifyErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(text);
            return Err(WeatherError::Api {
                service: SERVICE,
                status: status.as_u16(),
                message,
            });
        }

        let body: GeocodeResponse = response.json().await.map_err(|e| WeatherError::Parse {
            service: SERVICE,
            message: e.to_string(),
        })?;

        let coords = body
            .features
            .into_iter()
            .find_map(|feature| feature_coordinates(feature, city))
            .ok_or_else(|| WeatherError::LocationNotFound(city.to_string()))?;

        tracing::info!(
            lat = coords.latitude,
            lon = coords.longitude,
            "Geocoded to: {}",
            coords.formatted
        );
        Ok(coords)
    }
}

fn feature_coordinates(feature: GeocodeFeature, query: &str) -> Option<Coordinates> {
    let props = feature.properties;
    let (latitude, longitude) = match (props.lat, props.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            let point = feature.geometry?;
            match point.coordinates.as_slice() {
                [lon, lat, ..] => (*lat, *lon),
                _ => return None,
            }
        }
    };

    let formatted = props
        .formatted
        .or(props.city)
        .unwrap_or_else(|| query.to_string());

    Some(Coordinates {
        latitude,
        longitude,
        formatted,
    })
}
