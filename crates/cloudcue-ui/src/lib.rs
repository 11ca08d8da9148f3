//! Presentation layer for CloudCue.
//!
//! Runs the weather, geocoding and places lookups for a city, maps service
//! failures into `AppError`, and renders the landing, activities, favorites
//! and help views as terminal text.

pub mod error_mapping;
pub mod frontend;
pub mod routes;
pub mod services;
pub mod views;

pub use frontend::{Frontend, SaveOutcome};
pub use routes::Route;
pub use services::activities_service::{ActivitiesPage, ActivitiesService};
