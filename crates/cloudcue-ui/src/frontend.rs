//! Ties the activities service, the favorites store and the views together.

use cloudcue_activities::{FavoritesStore, LocalStorage};
use cloudcue_core::{AppError, Config, ConfigError};

use crate::error_mapping::IntoAppError;
use crate::routes::Route;
use crate::services::activities_service::{ActivitiesPage, ActivitiesService};
use crate::views;

/// Result of saving an activity from a results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    AlreadySaved,
    /// The id is not among the page's activities.
    NotInResults,
}

pub struct Frontend<S: LocalStorage> {
    service: Result<ActivitiesService, AppError>,
    favorites: FavoritesStore<S>,
}

impl<S: LocalStorage> Frontend<S> {
    /// Build from configuration. Missing API keys or invalid settings only
    /// fail searches; favorites and static pages still work.
    pub fn from_config(config: &Config, storage: S) -> Self {
        Self {
            service: ActivitiesService::from_config(config),
            favorites: FavoritesStore::load(storage),
        }
    }

    pub fn new(service: ActivitiesService, favorites: FavoritesStore<S>) -> Self {
        Self {
            service: Ok(service),
            favorites,
        }
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    /// Run the lookup pipeline for a city.
    pub async fn search(&self, city: &str) -> Result<ActivitiesPage, AppError> {
        match &self.service {
            Ok(service) => service.search(city).await,
            Err(e) => {
                tracing::warn!("Search unavailable: {}", e);
                Err(unavailable(e))
            }
        }
    }

    /// Save an activity from `page` by id.
    pub fn save(&mut self, page: &ActivitiesPage, id: &str) -> Result<SaveOutcome, AppError> {
        let Some(activity) = page.find(id) else {
            return Ok(SaveOutcome::NotInResults);
        };

        let added = self
            .favorites
            .add(activity.clone())
            .map_err(IntoAppError::into_app_error)?;
        Ok(if added {
            SaveOutcome::Added
        } else {
            SaveOutcome::AlreadySaved
        })
    }

    /// Remove a favorite. Returns `false` if the id wasn't saved.
    pub fn remove_favorite(&mut self, id: &str) -> Result<bool, AppError> {
        self.favorites
            .remove(id)
            .map_err(IntoAppError::into_app_error)
    }

    /// Render a successful page or the error panel for a failed one.
    pub fn render_search(
        &self,
        city: &str,
        result: &Result<ActivitiesPage, AppError>,
        tag: Option<&str>,
    ) -> String {
        match result {
            Ok(page) => views::render_activities(page, &self.favorites, tag),
            Err(e) => views::render_activities_error(city.trim(), e),
        }
    }

    /// Render whatever view `route` points at.
    pub async fn open(&self, route: &Route, tag: Option<&str>) -> String {
        tracing::debug!(path = %route.path(), "Opening route");
        match route {
            Route::Home => views::render_home(),
            Route::Help => views::render_help(),
            Route::Favorites => views::render_favorites(&self.favorites, tag),
            Route::Activities { city: None } => views::render_unknown_location(),
            Route::Activities { city: Some(city) } => {
                let result = self.search(city).await;
                self.render_search(city, &result, tag)
            }
        }
    }
}

/// Rebuild the setup failure for each search attempt.
fn unavailable(err: &AppError) -> AppError {
    match err {
        AppError::Config(e) => e.clone().into(),
        other => ConfigError::Invalid(other.detail()).into(),
    }
}
