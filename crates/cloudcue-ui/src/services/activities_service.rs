//! Activities backend: weather, geocoding and places for one city.
//!
//! Weather and geocoding run together; places runs once coordinates are
//! known. The first failure aborts the lookup and is the only error returned.

use std::time::Duration;

use cloudcue_activities::{Activity, ActivityPlan, PlacesClient};
use cloudcue_core::{AppError, Config, ConfigError};
use cloudcue_weather::{outfit_suggestion, Coordinates, Forecast, Geocoder, WeatherProvider};

use crate::error_mapping::IntoAppError;

/// Everything the activities view shows for one city.
#[derive(Debug, Clone)]
pub struct ActivitiesPage {
    pub city: String,
    pub forecast: Forecast,
    pub coordinates: Coordinates,
    pub plan: ActivityPlan,
    /// Outfit suggestion for the first forecast day
    pub outfit: Option<String>,
    pub activities: Vec<Activity>,
}

impl ActivitiesPage {
    pub fn find(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct ActivitiesService {
    weather: WeatherProvider,
    geocoder: Geocoder,
    places: PlacesClient,
    radius_meters: u32,
    limit: u32,
}

impl ActivitiesService {
    /// Build the service from configuration. Both API keys must be present
    /// and the configuration must validate.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let api = &config.api;
        if api.weather_api_key.trim().is_empty() {
            return Err(ConfigError::MissingSetting("api.weather_api_key".into()).into());
        }
        if api.geoapify_api_key.trim().is_empty() {
            return Err(ConfigError::MissingSetting("api.geoapify_api_key".into()).into());
        }

        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        let timeout = Duration::from_secs(config.search.request_timeout_secs);

        let weather = WeatherProvider::new(&api.weather_base_url, &api.weather_api_key, timeout)
            .map_err(IntoAppError::into_app_error)?
            .with_days(config.search.forecast_days);
        let geocoder = Geocoder::new(&api.geoapify_base_url, &api.geoapify_api_key, timeout)
            .map_err(IntoAppError::into_app_error)?;
        let places = PlacesClient::new(&api.geoapify_base_url, &api.geoapify_api_key, timeout)
            .map_err(IntoAppError::into_app_error)?;

        Ok(Self {
            weather,
            geocoder,
            places,
            radius_meters: config.search.places_radius_meters,
            limit: config.search.places_limit,
        })
    }

    /// Look up weather, location and activities for a city.
    pub async fn search(&self, city: &str) -> Result<ActivitiesPage, AppError> {
        let city = city.trim();
        tracing::info!(city, "Searching activities");

        let (forecast, coordinates) = tokio::try_join!(
            async {
                self.weather
                    .fetch_forecast(city)
                    .await
                    .map_err(IntoAppError::into_app_error)
            },
            async {
                self.geocoder
                    .geocode(city)
                    .await
                    .map_err(IntoAppError::into_app_error)
            },
        )
        .inspect_err(|e| tracing::warn!(city, "Lookup failed: {}", e))?;

        let plan = ActivityPlan::for_day(forecast.today());
        let outfit = forecast.today().map(|day| outfit_suggestion(&day.condition));

        let activities = self
            .places
            .search(&coordinates, plan, self.radius_meters, self.limit)
            .await
            .map_err(IntoAppError::into_app_error)
            .inspect_err(|e| tracing::warn!(city, "Places lookup failed: {}", e))?;

        Ok(ActivitiesPage {
            city: city.to_string(),
            forecast,
            coordinates,
            plan,
            outfit,
            activities,
        })
    }
}
