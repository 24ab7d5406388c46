//! Presentation tokens keyed by condition.

use serde::Serialize;

use crate::types::Condition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub accent: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
    pub glass: &'static str,
}

const SUNNY: ThemeTokens = ThemeTokens {
    background: "var(--grad-sunny)",
    accent: "#FF7E5F",
    icon: "Sun",
    text: "#2D3436",
    subtext: "rgba(0,0,0,0.6)",
    glass: "rgba(255,255,255,0.4)",
};

const RAINY: ThemeTokens = ThemeTokens {
    background: "var(--grad-rainy)",
    accent: "#00B4DB",
    icon: "CloudRain",
    text: "#FFFFFF",
    subtext: "rgba(255,255,255,0.7)",
    glass: "rgba(0,0,0,0.2)",
};

const CLOUDY: ThemeTokens = ThemeTokens {
    background: "var(--grad-cloudy)",
    accent: "#757F9A",
    icon: "Cloud",
    text: "#FFFFFF",
    subtext: "rgba(255,255,255,0.7)",
    glass: "rgba(0,0,0,0.2)",
};

const NIGHT: ThemeTokens = ThemeTokens {
    background: "var(--grad-night)",
    accent: "#2a5298",
    icon: "Moon",
    text: "#FFFFFF",
    subtext: "rgba(255,255,255,0.7)",
    glass: "rgba(0,0,0,0.3)",
};

/// Tokens for a condition; no condition means the night set
pub fn theme_for(condition: Option<Condition>) -> ThemeTokens {
    match condition {
        Some(Condition::Sunny) => SUNNY,
        Some(Condition::Rainy) => RAINY,
        Some(Condition::Cloudy) => CLOUDY,
        None => NIGHT,
    }
}

/// Tokens for a raw condition label such as "Rainy"
pub fn theme_for_label(label: &str) -> ThemeTokens {
    theme_for(Condition::from_label(label))
}
