//! Weather service for CloudCue
//!
//! Provides multi-day forecasts via the weatherapi.com forecast endpoint,
//! forward geocoding of city names via Geoapify, and outfit suggestions
//! derived from forecast condition text.

pub mod geocode;
pub mod outfit;
pub mod provider;
pub mod types;

pub use geocode::Geocoder;
pub use outfit::outfit_suggestion;
pub use provider::WeatherProvider;
pub use types::*;
