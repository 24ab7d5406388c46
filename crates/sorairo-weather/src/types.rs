use serde::{Deserialize, Serialize};

use crate::gazetteer::Region;

/// Three-way sky condition used by every advice table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Condition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Self::Sunny, Self::Cloudy, Self::Rainy];

    /// Parse an exact label ("Sunny", "Cloudy", "Rainy")
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Sunny" => Some(Self::Sunny),
            "Cloudy" => Some(Self::Cloudy),
            "Rainy" => Some(Self::Rainy),
            _ => None,
        }
    }

    /// Parse a label, treating anything unrecognized as the default condition
    pub fn from_label_or_default(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Weather snapshot for one region.
///
/// Numeric fields are not clamped: a misbehaving remote source may report
/// humidity above 100 or a negative sunshine ratio, and every advice ladder
/// still has a fallback branch for those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherProfile {
    pub condition: Condition,
    /// Degrees Celsius
    pub temperature: i32,
    /// Metres per second, one decimal digit
    pub wind_speed: f64,
    /// Relative humidity in percent
    pub humidity: i32,
    /// Nominally 0.0 to 1.0
    pub sunshine_ratio: f64,
    pub region: Region,
    /// 0-23, only read by the sky advice
    pub hour_of_day: u8,
}

/// Round to the nearest integer, halves toward positive infinity
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Round to one decimal digit, halves toward positive infinity
pub(crate) fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Content derivation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Invalid page index {0}, expected 0, 1 or 2")]
    InvalidPageIndex(i64),
}

/// Remote provider failures. Logged and collapsed to `None` at the
/// weather source boundary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Authentication rejected with status {0}")]
    Unauthorized(u16),
    #[error("Endpoint not found")]
    NotFound,
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Short category name used in diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "auth",
            Self::NotFound => "not_found",
            Self::Status(_) => "status",
            Self::Transport(_) => "transport",
            Self::Malformed(_) => "malformed",
        }
    }
}
