use anyhow::Result;
use std::sync::Arc;

use crate::{Config, ValidationResult};

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
    validation: ValidationResult,
}

impl App {
    /// Create a new application instance from the user's config file
    pub fn new() -> Result<Self> {
        let (config, validation) = Config::load_validated()?;
        Ok(Self::with_config(config, validation))
    }

    /// Create an application instance from an already loaded config
    pub fn with_config(config: Config, validation: ValidationResult) -> Self {
        Self {
            config: Arc::new(config),
            validation,
        }
    }

    /// Log the effective settings
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            provider = ?self.config.weather.provider,
            default_region = %self.config.location.default_region,
            "Initializing application"
        );

        if !self.validation.warnings.is_empty() {
            tracing::info!(
                "Started with {} configuration warning(s)",
                self.validation.warnings.len()
            );
        }

        Ok(())
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

    /// Shared handle to the config
    pub fn shared_config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }
}
