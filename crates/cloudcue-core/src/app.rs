use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::Config;

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
}

impl App {
    /// Create a new application instance from the on-disk configuration.
    ///
    /// Validation problems don't stop the app; searches refuse an invalid
    /// config and `cloudcue config` reports it.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::load()?)
    }

    /// Create an application instance around an already-loaded configuration
    pub fn with_config(config: Config) -> Result<Self> {
        std::fs::create_dir_all(&config.storage.data_dir).with_context(|| {
            format!(
                "Failed to create data directory {}",
                config.storage.data_dir.display()
            )
        })?;

        tracing::info!(
            data_dir = %config.storage.data_dir.display(),
            "Application initialized"
        );

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory for locally persisted state
    pub fn data_dir(&self) -> &Path {
        &self.config.storage.data_dir
    }
}
