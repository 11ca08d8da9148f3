//! Forecast client for the weatherapi.com `forecast.json` endpoint.

use crate::types::{deserialize_percent, Forecast, ForecastLocation, WeatherDay, WeatherError};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

const SERVICE: &str = "Weather";
const DEFAULT_DAYS: u8 = 3;
/// weatherapi.com error code for "No matching location found."
const NO_MATCHING_LOCATION: i64 = 1006;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    location: ForecastLocation,
    forecast: ForecastBlock,
}

#[derive(Debug, Deserialize)]
struct ForecastBlock {
    #[serde(default)]
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: NaiveDate,
    day: ApiDay,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    avgtemp_c: f64,
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: ApiCondition,
    #[serde(default, deserialize_with = "deserialize_percent")]
    daily_chance_of_rain: u8,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: i64,
    message: String,
}

impl From<ApiForecastDay> for WeatherDay {
    fn from(api: ApiForecastDay) -> Self {
        Self {
            date: api.date,
            avg_temp: api.day.avgtemp_c,
            max_temp: api.day.maxtemp_c,
            min_temp: api.day.mintemp_c,
            condition: api.day.condition.text,
            chance_of_rain: api.day.daily_chance_of_rain,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
    days: u8,
}

impl WeatherProvider {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| WeatherError::Network {
                service: SERVICE,
                source,
            })?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            days: DEFAULT_DAYS,
        })
    }

    /// Number of forecast days to request
    pub fn with_days(mut self, days: u8) -> Self {
        self.days = days.max(1);
        self
    }

    /// Fetch the daily forecast for a free-text city query.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        let url = format!(
            "{}/forecast.json?key={}&q={}&days={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(city),
            self.days,
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
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::error_from_body(status.as_u16(), &text, city));
        }

        let body: ForecastResponse = response.json().await.map_err(|e| WeatherError::Parse {
            service: SERVICE,
            message: e.to_string(),
        })?;

        let forecast = Forecast {
            location: body.location,
            days: body.forecast.forecastday.into_iter().map(WeatherDay::from).collect(),
        };

        tracing::info!(
            location = %forecast.location.display_name(),
            days = forecast.days.len(),
            "Fetched forecast"
        );
        Ok(forecast)
    }

    fn error_from_body(status: u16, text: &str, city: &str) -> WeatherError {
        let envelope = serde_json::from_str::<ApiErrorEnvelope>(text).ok();

        match (status, envelope) {
            (401 | 403, _) => WeatherError::InvalidApiKey { service: SERVICE },
            (_, Some(env)) if env.error.code == NO_MATCHING_LOCATION => {
                WeatherError::LocationNotFound(city.to_string())
            }
            (_, Some(env)) => WeatherError::Api {
                service: SERVICE,
                status,
                message: env.error.message,
            },
            (_, None) => WeatherError::Api {
                service: SERVICE,
                status,
                message: if text.is_empty() {
                    "empty response".to_string()
                } else {
                    text.to_string()
                },
            },
        }
    }
}
