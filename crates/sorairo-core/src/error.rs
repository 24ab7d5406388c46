//! Centralized error types for the Sorairo application.
//!
//! Every error that reaches a caller converts into [`AppError`], which carries
//! a short `user_message()` for display next to the full error for logs.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }
}

/// Configuration errors that survive loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown region in configuration: {0}")]
    UnknownRegion(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::UnknownRegion(_) => {
                "The default region is not a known prefecture. Check your settings."
            }
        }
    }
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather client setup failed: {0}")]
    ClientSetup(String),

    #[error("Invalid page index: {0}")]
    InvalidPageIndex(i64),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::ClientSetup(_) => {
                "Weather service could not be started. Check settings."
            }
            WeatherError::InvalidPageIndex(_) => "That page does not exist.",
        }
    }
}
