//! The weather source capability. Callers ask for a region's profile and never
//! see which provider answered.

use sorairo_core::{AppError, WeatherConfig, WeatherError, WeatherProviderKind};

use crate::gazetteer::Region;
use crate::remote::RemoteFetcher;
use crate::snapshot;
use crate::synthetic;
use crate::types::WeatherProfile;

/// Provider selected by configuration
#[derive(Debug, Clone)]
pub enum WeatherSource {
    /// Deterministic profile from the region index
    Synthetic,
    /// Observed snapshots, synthetic for uncovered regions
    Snapshot,
    /// HTTP observation API queried at the region's capital
    Remote(RemoteFetcher),
}

impl WeatherSource {
    pub fn from_config(config: &WeatherConfig) -> Result<Self, AppError> {
        Ok(match config.provider {
            WeatherProviderKind::Synthetic => Self::Synthetic,
            WeatherProviderKind::Snapshot => Self::Snapshot,
            WeatherProviderKind::Remote => {
                let fetcher =
                    RemoteFetcher::new(config.remote_base_url.clone(), config.api_key.clone())
                        .map_err(|e| AppError::Weather(WeatherError::ClientSetup(e.to_string())))?;
                Self::Remote(fetcher)
            }
        })
    }

    pub fn kind(&self) -> WeatherProviderKind {
        match self {
            Self::Synthetic => WeatherProviderKind::Synthetic,
            Self::Snapshot => WeatherProviderKind::Snapshot,
            Self::Remote(_) => WeatherProviderKind::Remote,
        }
    }

    /// Profile for `region`; only the remote provider can come back empty
    pub async fn profile_for(&self, region: Region) -> Option<WeatherProfile> {
        match self {
            Self::Synthetic => Some(synthetic::generate(region)),
            Self::Snapshot => Some(snapshot::profile_for(region)),
            Self::Remote(fetcher) => fetcher.fetch(region.coordinates(), region).await,
        }
    }
}
