use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Coarse weather categories derived from free-text condition strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    Clear,
    Rain,
    Snow,
    Cloudy,
    Thunderstorm,
    Fog,
}

impl ConditionKind {
    /// Substring heuristics over a condition string, checked in a fixed order:
    /// sunny/clear, rain, snow, cloud, thunder/storm, fog/mist.
    pub fn from_text(condition: &str) -> Option<Self> {
        let text = condition.to_lowercase();
        if text.contains("sunny") || text.contains("clear") {
            Some(Self::Clear)
        } else if text.contains("rain") {
            Some(Self::Rain)
        } else if text.contains("snow") {
            Some(Self::Snow)
        } else if text.contains("cloud") {
            Some(Self::Cloudy)
        } else if text.contains("thunder") || text.contains("storm") {
            Some(Self::Thunderstorm)
        } else if text.contains("fog") || text.contains("mist") {
            Some(Self::Fog)
        } else {
            None
        }
    }

    /// Emoji shown on weather cards
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Cloudy => "☁️",
            Self::Thunderstorm => "⛈️",
            Self::Fog => "🌫️",
        }
    }

    /// Whether this weather pushes activities indoors
    pub fn is_wet(&self) -> bool {
        matches!(self, Self::Rain | Self::Snow | Self::Thunderstorm)
    }
}

/// Geographic coordinates resolved from a city name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Provider's formatted place name, e.g. "Vancouver, BC, Canada"
    pub formatted: String,
}

/// Location the forecast was resolved to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastLocation {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
}

impl ForecastLocation {
    /// "Name, Region" when the region adds information
    pub fn display_name(&self) -> String {
        if self.region.is_empty() || self.region == self.name {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.region)
        }
    }
}

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    pub date: NaiveDate,
    pub avg_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub condition: String,
    pub chance_of_rain: u8,
}

impl WeatherDay {
    /// Coarse category for this day's condition text
    pub fn kind(&self) -> Option<ConditionKind> {
        crate::outfit::condition_kind(&self.condition)
    }
}

/// Complete forecast bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location: ForecastLocation,
    pub days: Vec<WeatherDay>,
}

impl Forecast {
    /// The first forecast day, normally today
    pub fn today(&self) -> Option<&WeatherDay> {
        self.days.first()
    }
}

/// Weather and geocoding errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("{service} request failed: {source}")]
    Network {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} API key was rejected")]
    InvalidApiKey { service: &'static str },
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("{service} API error ({status}): {message}")]
    Api {
        service: &'static str,
        status: u16,
        message: String,
    },
    #[error("{service} response could not be parsed: {message}")]
    Parse {
        service: &'static str,
        message: String,
    },
}

/// Accepts a percentage sent either as a number or as a numeric string.
pub(crate) fn deserialize_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom)?,
    };
    Ok(value.round().clamp(0.0, 100.0) as u8)
}
