//! Activity recommendations for CloudCue.
//!
//! Queries the Geoapify places API around a geocoded city, classifies each
//! place into display metadata, and keeps the user's favorites persisted in
//! local storage.

pub mod classify;
pub mod favorites;
pub mod filter;
pub mod places;
pub mod plan;
pub mod storage;
pub mod types;

pub use classify::{classify_categories, classify_place, PlaceDisplay};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use filter::{filter_by_tag, unique_tags};
pub use places::{PlacesClient, PlacesError};
pub use plan::ActivityPlan;
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError};
pub use types::Activity;
