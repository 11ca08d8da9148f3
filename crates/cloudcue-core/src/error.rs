//! Centralized error types for CloudCue.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// Errors from the service crates are mapped into this type at the view
/// boundary. Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Places service error: {0}")]
    Places(#[from] PlacesError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Navigation to a route that does not exist.
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Places(e) => e.user_message(),
            AppError::Storage(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::NotFound(_) => "That page does not exist. Try `cloudcue guide`.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }

    /// The underlying diagnostic without the category prefix.
    pub fn detail(&self) -> String {
        match self {
            AppError::Network(e) => e.to_string(),
            AppError::Config(e) => e.to_string(),
            AppError::Weather(e) => e.to_string(),
            AppError::Places(e) => e.to_string(),
            AppError::Storage(e) => e.to_string(),
            AppError::Io(e) => e.to_string(),
            AppError::NotFound(path) => format!("No page at {}", path),
            AppError::Other(e) => e.to_string(),
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to connect. Check your internet connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The server is experiencing issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::MissingSetting(_) => "A required setting is missing. Check your settings.",
        }
    }
}

/// Weather and geocoding service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("{0}")]
    ApiError(String),

    #[error("{0}")]
    InvalidApiKey(String),

    #[error("{0}")]
    Unreachable(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::LocationNotFound(_) => {
                "We couldn't find that place. Please try a different city."
            }
            WeatherError::ApiError(_) => {
                "Couldn't load the weather. Please try a different city."
            }
            WeatherError::InvalidApiKey(_) => "Weather API key is invalid. Check settings.",
            WeatherError::Unreachable(_) => {
                "Couldn't reach the weather service. Check your connection or try a different city."
            }
        }
    }
}

/// Places (points of interest) service errors.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("{0}")]
    ApiError(String),

    #[error("{0}")]
    InvalidApiKey(String),

    #[error("{0}")]
    Unreachable(String),
}

impl PlacesError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PlacesError::ApiError(_) => {
                "Couldn't load activities. Please try a different city."
            }
            PlacesError::InvalidApiKey(_) => "Places API key is invalid. Check settings.",
            PlacesError::Unreachable(_) => {
                "Couldn't reach the places service. Check your connection or try a different city."
            }
        }
    }
}

/// Local storage errors (favorites file).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {key}: {message}")]
    ReadFailed { key: String, message: String },

    #[error("Failed to write {key}: {message}")]
    WriteFailed { key: String, message: String },
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::ReadFailed { .. } => "Couldn't read saved favorites.",
            StorageError::WriteFailed { .. } => {
                "Couldn't save favorites. Check disk space and permissions."
            }
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
