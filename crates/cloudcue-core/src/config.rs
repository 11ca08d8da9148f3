use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable holding the weather API key.
pub const WEATHER_API_KEY_ENV: &str = "CLOUDCUE_WEATHER_API_KEY";
/// Environment variable holding the Geoapify API key.
pub const GEOAPIFY_API_KEY_ENV: &str = "CLOUDCUE_GEOAPIFY_API_KEY";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// External API endpoints and keys
    #[serde(default)]
    pub api: ApiConfig,

    /// Search tuning
    #[serde(default)]
    pub search: SearchConfig,

    /// Local persistence
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the forecast API (weatherapi.com layout)
    pub weather_base_url: String,

    /// Forecast API key. Overridden by `CLOUDCUE_WEATHER_API_KEY`.
    #[serde(default)]
    pub weather_api_key: String,

    /// Base URL of the Geoapify API (geocoding and places)
    pub geoapify_base_url: String,

    /// Geoapify API key. Overridden by `CLOUDCUE_GEOAPIFY_API_KEY`.
    #[serde(default)]
    pub geoapify_api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            weather_base_url: "https://api.weatherapi.com/v1".to_string(),
            weather_api_key: String::new(),
            geoapify_base_url: "https://api.geoapify.com".to_string(),
            geoapify_api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of forecast days to request (default: 3)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Search radius around the city centre in meters (default: 5000)
    #[serde(default = "default_places_radius")]
    pub places_radius_meters: u32,

    /// Maximum number of places to request (default: 12)
    #[serde(default = "default_places_limit")]
    pub places_limit: u32,

    /// HTTP request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_forecast_days() -> u8 {
    3
}

fn default_places_radius() -> u32 {
    5000
}

fn default_places_limit() -> u32 {
    12
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            forecast_days: default_forecast_days(),
            places_radius_meters: default_places_radius(),
            places_limit: default_places_limit(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding locally persisted state (favorites)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cloudcue")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cloudcue");

        Self {
            config_dir,
            api: ApiConfig::default(),
            search: SearchConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing.
    ///
    /// API keys from the environment take precedence over the file.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file, writing defaults if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Overlay API keys from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Overlay API keys from an arbitrary variable lookup. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(WEATHER_API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api.weather_api_key = key;
        }
        if let Some(key) = lookup(GEOAPIFY_API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api.geoapify_api_key = key;
        }
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.api.weather_base_url, "api.weather_base_url", &mut result);
        self.validate_url(
            &self.api.geoapify_base_url,
            "api.geoapify_base_url",
            &mut result,
        );

        // Missing keys only disable searching; favorites still work
        if self.api.weather_api_key.trim().is_empty() {
            result.add_warning(
                "api.weather_api_key",
                format!("Weather API key not set (config file or {})", WEATHER_API_KEY_ENV),
            );
        }
        if self.api.geoapify_api_key.trim().is_empty() {
            result.add_warning(
                "api.geoapify_api_key",
                format!("Geoapify API key not set (config file or {})", GEOAPIFY_API_KEY_ENV),
            );
        }

        if self.search.forecast_days == 0 || self.search.forecast_days > 14 {
            result.add_error(
                "search.forecast_days",
                "Forecast days must be between 1 and 14",
            );
        }

        if self.search.places_limit == 0 || self.search.places_limit > 500 {
            result.add_error("search.places_limit", "Places limit must be between 1 and 500");
        }

        if self.search.places_radius_meters == 0 {
            result.add_error(
                "search.places_radius_meters",
                "Search radius must be greater than 0",
            );
        } else if self.search.places_radius_meters > 50_000 {
            result.add_warning(
                "search.places_radius_meters",
                "Search radius is unusually large (>50km)",
            );
        }

        if self.search.request_timeout_secs == 0 {
            result.add_error(
                "search.request_timeout_secs",
                "Request timeout must be greater than 0",
            );
        }

        if self.storage.data_dir.is_file() {
            result.add_error(
                "storage.data_dir",
                format!(
                    "Path is a file, not a directory: {}",
                    self.storage.data_dir.display()
                ),
            );
        }

        result
    }

    /// Whether both API keys are present.
    pub fn has_api_keys(&self) -> bool {
        !self.api.weather_api_key.trim().is_empty()
            && !self.api.geoapify_api_key.trim().is_empty()
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if let Some(port) = url.port() {
                    if port == 0 {
                        result.add_error(field_name, "Port cannot be 0");
                    }
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("cloudcue");

        Ok(config_dir.join("config.toml"))
    }
}
