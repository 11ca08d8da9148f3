//! Weather-aware choice of which place categories to search.

use cloudcue_weather::WeatherDay;

/// Chance of rain at or above which we favour indoor places.
pub const WET_CHANCE_OF_RAIN: u8 = 60;

const INDOOR_CATEGORIES: &[&str] = &[
    "entertainment.museum",
    "entertainment.culture",
    "entertainment.cinema",
    "entertainment.aquarium",
    "entertainment.bowling_alley",
    "entertainment.escape_game",
    "catering.cafe",
    "catering.restaurant",
    "commercial.shopping_mall",
    "leisure.spa",
];

const OUTDOOR_CATEGORIES: &[&str] = &[
    "leisure.park",
    "natural.beach",
    "tourism.attraction",
    "tourism.sights",
    "entertainment.zoo",
    "entertainment.museum",
    "catering.cafe",
    "catering.restaurant",
    "commercial.marketplace",
];

/// Which kind of places to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityPlan {
    Indoor,
    Outdoor,
}

impl ActivityPlan {
    /// Indoor when the day is wet or likely to rain; outdoor otherwise
    /// (including when there is no forecast at all).
    pub fn for_day(day: Option<&WeatherDay>) -> Self {
        let Some(day) = day else {
            return Self::Outdoor;
        };

        let wet_condition = day.kind().is_some_and(|k| k.is_wet());
        if wet_condition || day.chance_of_rain >= WET_CHANCE_OF_RAIN {
            Self::Indoor
        } else {
            Self::Outdoor
        }
    }

    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Indoor => INDOOR_CATEGORIES,
            Self::Outdoor => OUTDOOR_CATEGORIES,
        }
    }

    /// Comma-joined value for the places `categories` query parameter.
    pub fn categories_param(&self) -> String {
        self.categories().join(",")
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Indoor => "🏠 Wet weather ahead, so here are indoor picks",
            Self::Outdoor => "🌤️ Good weather for getting out and about",
        }
    }
}
