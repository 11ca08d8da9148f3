//! Conversions from service-crate errors into the application error type.

use cloudcue_activities::{PlacesError as ServicePlacesError, StorageError as ServiceStorageError};
use cloudcue_core::{AppError, PlacesError, ReqwestErrorExt, StorageError, WeatherError};
use cloudcue_weather::WeatherError as ServiceWeatherError;

/// Map a service error into `AppError`, keeping its diagnostic text.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}

impl IntoAppError for ServiceWeatherError {
    fn into_app_error(self) -> AppError {
        let detail = self.to_string();
        let mapped = match self {
            ServiceWeatherError::Network { service, source } => {
                WeatherError::Unreachable(format!("{}: {}", service, source.into_network_error()))
            }
            ServiceWeatherError::InvalidApiKey { .. } => WeatherError::InvalidApiKey(detail),
            ServiceWeatherError::LocationNotFound(city) => WeatherError::LocationNotFound(city),
            ServiceWeatherError::Api { .. } | ServiceWeatherError::Parse { .. } => {
                WeatherError::ApiError(detail)
            }
        };
        AppError::Weather(mapped)
    }
}

impl IntoAppError for ServicePlacesError {
    fn into_app_error(self) -> AppError {
        let detail = self.to_string();
        let mapped = match self {
            ServicePlacesError::Network(source) => {
                PlacesError::Unreachable(format!("Places: {}", source.into_network_error()))
            }
            ServicePlacesError::InvalidApiKey => PlacesError::InvalidApiKey(detail),
            ServicePlacesError::Api { .. } | ServicePlacesError::Parse(_) => {
                PlacesError::ApiError(detail)
            }
        };
        AppError::Places(mapped)
    }
}

impl IntoAppError for ServiceStorageError {
    fn into_app_error(self) -> AppError {
        let mapped = match &self {
            ServiceStorageError::Read { key, .. } => StorageError::ReadFailed {
                key: key.clone(),
                message: self.to_string(),
            },
            ServiceStorageError::Write { key, .. } | ServiceStorageError::Serialize { key, .. } => {
                StorageError::WriteFailed {
                    key: key.clone(),
                    message: self.to_string(),
                }
            }
        };
        AppError::Storage(mapped)
    }
}
