//! Navigation between views.
//!
//! Paths mirror the web front-end: `/`, `/activities?city=...`,
//! `/favorites` and `/help`.

use cloudcue_core::AppError;
use url::Url;

/// Heading used when the activities route carries no city.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

const ROUTE_BASE: &str = "cloudcue://app/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Activities { city: Option<String> },
    Favorites,
    Help,
}

impl Route {
    /// Route for a city typed on the landing view.
    ///
    /// Returns `None` for blank input; the city is trimmed.
    pub fn from_search_input(input: &str) -> Option<Self> {
        let city = input.trim();
        if city.is_empty() {
            return None;
        }
        Some(Self::Activities {
            city: Some(city.to_string()),
        })
    }

    /// Parse a path such as `/activities?city=North%20Vancouver`.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let not_found = || AppError::NotFound(input.to_string());
        let url = Url::parse(ROUTE_BASE)
            .and_then(|base| base.join(input.trim()))
            .map_err(|_| not_found())?;

        let path = url.path().trim_end_matches('/');
        match path {
            "" => Ok(Self::Home),
            "/activities" => {
                let city = url
                    .query_pairs()
                    .find(|(k, _)| k == "city")
                    .map(|(_, v)| v.trim().to_string())
                    .filter(|v| !v.is_empty());
                Ok(Self::Activities { city })
            }
            "/favorites" => Ok(Self::Favorites),
            "/help" => Ok(Self::Help),
            _ => Err(not_found()),
        }
    }

    /// Path form of the route, with the city percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Activities { city: Some(city) } => {
                format!("/activities?city={}", urlencoding::encode(city))
            }
            Self::Activities { city: None } => "/activities".to_string(),
            Self::Favorites => "/favorites".to_string(),
            Self::Help => "/help".to_string(),
        }
    }
}
