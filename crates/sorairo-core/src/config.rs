use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable holding the optional remote weather API key
pub const API_KEY_ENV: &str = "SORAIRO_WXTECH_API_KEY";

/// Default observation endpoint for the remote provider
pub const DEFAULT_REMOTE_BASE_URL: &str = "https://wxtech.weathernews.com/api/v1/observation";

/// Region used when no configuration says otherwise
pub const DEFAULT_REGION: &str = "東京都";

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

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Weather source settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Location search settings
    #[serde(default)]
    pub location: LocationConfig,
}

/// Which weather source backs the cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherProviderKind {
    #[default]
    Synthetic,
    Snapshot,
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Active provider
    #[serde(default)]
    pub provider: WeatherProviderKind,

    /// Observation endpoint queried with `lat`/`lon` parameters
    #[serde(default = "default_remote_base_url")]
    pub remote_base_url: String,

    /// API key for the remote provider (falls back to the environment)
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,
}

fn default_remote_base_url() -> String {
    DEFAULT_REMOTE_BASE_URL.to_string()
}

fn default_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            provider: WeatherProviderKind::default(),
            remote_base_url: default_remote_base_url(),
            api_key: default_api_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Region used when a search cannot be resolved
    #[serde(default = "default_region")]
    pub default_region: String,

    /// Text searched when the session starts
    #[serde(default = "default_region")]
    pub initial_query: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_region: default_region(),
            initial_query: default_region(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory.
    ///
    /// A missing file yields the defaults; the file is never written.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.weather.provider == WeatherProviderKind::Remote {
            self.validate_url(
                &self.weather.remote_base_url,
                "weather.remote_base_url",
                &mut result,
            );

            if self.weather.api_key.is_none() {
                result.add_warning(
                    "weather.api_key",
                    format!("Remote provider selected but {} is not set", API_KEY_ENV),
                );
            }
        }

        if self.location.default_region.trim().is_empty() {
            result.add_error("location.default_region", "Default region must not be empty");
        }

        if self.location.initial_query.trim().is_empty() {
            result.add_warning(
                "location.initial_query",
                "Initial query is empty; the default region will be shown",
            );
        }

        result
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

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("sorairo");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert_eq!(config.weather.provider, WeatherProviderKind::Synthetic);
        assert_eq!(config.location.default_region, "東京都");
    }

    #[test]
    fn test_invalid_url_only_checked_for_remote() {
        let mut config = Config::default();
        config.weather.remote_base_url = "not-a-url".to_string();
        assert!(config.validate().is_valid());

        config.weather.provider = WeatherProviderKind::Remote;
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.remote_base_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.provider = WeatherProviderKind::Remote;
        config.weather.remote_base_url = "ftp://localhost:8080".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_missing_api_key_is_warning() {
        let mut config = Config::default();
        config.weather.provider = WeatherProviderKind::Remote;
        config.weather.api_key = None;
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "weather.api_key"));
    }

    #[test]
    fn test_empty_default_region_is_error() {
        let mut config = Config::default();
        config.location.default_region = "   ".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.error_summary().contains("location.default_region"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            [weather]
            provider = "snapshot"
            "#,
        )
        .unwrap();
        assert_eq!(config.weather.provider, WeatherProviderKind::Snapshot);
        assert_eq!(config.weather.remote_base_url, DEFAULT_REMOTE_BASE_URL);
        assert_eq!(config.location.initial_query, "東京都");
    }

    #[test]
    fn test_unknown_provider_is_parse_error() {
        let result = Config::from_toml_str(
            r#"
            [weather]
            provider = "satellite"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[weather]\nprovider = \"remote\"\nremote_base_url = \"http://127.0.0.1:9000/obs\"\napi_key = \"secret\"\n\n[location]\ndefault_region = \"大阪府\"\ninitial_query = \"梅田\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.weather.provider, WeatherProviderKind::Remote);
        assert_eq!(config.weather.api_key.as_deref(), Some("secret"));
        assert_eq!(config.location.default_region, "大阪府");
        assert_eq!(config.location.initial_query, "梅田");
        assert!(config.validate().is_valid());
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
