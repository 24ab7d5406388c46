//! HTTP weather provider.
//!
//! Queries an observation endpoint with `lat`/`lon` and normalizes the JSON
//! object it returns into a [`WeatherProfile`]. The external field names and
//! weather-code thresholds are provisional, so both live in a
//! [`PayloadMapping`] that can be swapped without touching callers.
//! Every failure is logged by category and reported as `None`.

use std::ops::Range;

use chrono::Timelike;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::gazetteer::Region;
use crate::types::{
    round_half_up, round_tenths, Condition, Coordinates, FetchError, WeatherProfile,
};

const USER_AGENT: &str = "Sorairo/0.1.0";
const API_KEY_HEADER: &str = "X-Api-Key";

/// Candidate keys for one logical field, tried in order, then a default
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub keys: Vec<String>,
    pub default: f64,
}

impl FieldRule {
    pub fn new(keys: &[&str], default: f64) -> Self {
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            default,
        }
    }

    /// First candidate key holding a number (or numeric string), else the default
    pub fn extract(&self, payload: &Map<String, Value>) -> f64 {
        self.keys
            .iter()
            .filter_map(|key| payload.get(key))
            .find_map(numeric)
            .unwrap_or(self.default)
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Numeric weather code → condition bands
#[derive(Debug, Clone, PartialEq)]
pub struct CodeThresholds {
    /// Codes at or below this are sunny
    pub sunny_max: f64,
    pub sunny_band: Range<f64>,
    /// Codes at or below this (and not sunny) are cloudy
    pub cloudy_max: f64,
    pub cloudy_band: Range<f64>,
}

impl Default for CodeThresholds {
    fn default() -> Self {
        Self {
            sunny_max: 2.0,
            sunny_band: 100.0..200.0,
            cloudy_max: 4.0,
            cloudy_band: 200.0..300.0,
        }
    }
}

impl CodeThresholds {
    pub fn classify(&self, code: f64) -> Condition {
        if code <= self.sunny_max || self.sunny_band.contains(&code) {
            Condition::Sunny
        } else if code <= self.cloudy_max || self.cloudy_band.contains(&code) {
            Condition::Cloudy
        } else {
            Condition::Rainy
        }
    }
}

/// How an external payload maps onto a profile
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadMapping {
    pub temperature: FieldRule,
    pub humidity: FieldRule,
    pub wind_speed: FieldRule,
    pub weather_code: FieldRule,
    pub sunshine: FieldRule,
    pub thresholds: CodeThresholds,
}

impl Default for PayloadMapping {
    fn default() -> Self {
        Self {
            temperature: FieldRule::new(&["temperature", "temp"], 20.0),
            humidity: FieldRule::new(&["humidity", "rh"], 50.0),
            wind_speed: FieldRule::new(&["wind_speed", "wind"], 2.0),
            weather_code: FieldRule::new(&["weather_code", "wx_code"], 100.0),
            sunshine: FieldRule::new(&["sunshine_duration", "sunshine"], 0.5),
            thresholds: CodeThresholds::default(),
        }
    }
}

impl PayloadMapping {
    /// Normalize a decoded JSON body into a profile
    pub fn to_profile(
        &self,
        payload: &Value,
        region: Region,
        hour_of_day: u8,
    ) -> Result<WeatherProfile, FetchError> {
        let object = payload
            .as_object()
            .ok_or_else(|| FetchError::Malformed("expected a JSON object".to_string()))?;

        Ok(WeatherProfile {
            condition: self.thresholds.classify(self.weather_code.extract(object)),
            temperature: round_half_up(self.temperature.extract(object)),
            wind_speed: round_tenths(self.wind_speed.extract(object)),
            humidity: round_half_up(self.humidity.extract(object)),
            sunshine_ratio: self.sunshine.extract(object),
            region,
            hour_of_day,
        })
    }
}

/// Weather source backed by an HTTP observation API
#[derive(Debug, Clone)]
pub struct RemoteFetcher {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    mapping: PayloadMapping,
}

impl RemoteFetcher {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
            mapping: PayloadMapping::default(),
        })
    }

    /// Replace the payload mapping
    pub fn with_mapping(mut self, mapping: PayloadMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch current conditions at `coordinates`, stamped with `region`.
    ///
    /// Returns `None` on transport failure, non-2xx status or a malformed body.
    pub async fn fetch(&self, coordinates: Coordinates, region: Region) -> Option<WeatherProfile> {
        match self.try_fetch(coordinates, region).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                log_failure(&e);
                None
            }
        }
    }

    /// Same as [`fetch`](Self::fetch) but keeps the failure
    #[instrument(skip(self), level = "debug")]
    pub async fn try_fetch(
        &self,
        coordinates: Coordinates,
        region: Region,
    ) -> Result<WeatherProfile, FetchError> {
        let url = format!(
            "{}?lat={}&lon={}",
            self.base_url, coordinates.latitude, coordinates.longitude
        );
        tracing::debug!("Fetching weather data from: {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    FetchError::Unauthorized(status.as_u16())
                }
                StatusCode::NOT_FOUND => FetchError::NotFound,
                _ => FetchError::Status(status.as_u16()),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        self.mapping.to_profile(&body, region, current_hour())
    }
}

fn current_hour() -> u8 {
    chrono::Local::now().hour() as u8
}

fn log_failure(error: &FetchError) {
    let category = error.category();
    match error {
        FetchError::Unauthorized(status) => tracing::error!(
            category,
            status,
            "Weather API authentication failed: check the API key or access permission"
        ),
        FetchError::NotFound => tracing::error!(
            category,
            "Weather API endpoint not found: check the base URL"
        ),
        _ => tracing::error!(category, "Weather API error: {}", error),
    }
}
