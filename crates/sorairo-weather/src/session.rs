//! Card session: the small piece of state a UI shell holds between events.
//!
//! A search resolves the text, fetches a profile and rewinds to the first
//! page; advancing cycles through the three pages. Everything else is
//! derived on demand.

use sorairo_core::{AppError, Config, ConfigError};

use crate::content::{self, ContentPage, PageKind};
use crate::gazetteer::Region;
use crate::resolver::LocationResolver;
use crate::source::WeatherSource;
use crate::synthetic;
use crate::theme::{self, ThemeTokens};
use crate::types::WeatherProfile;

#[derive(Debug, Clone)]
pub struct CardSession {
    source: WeatherSource,
    resolver: LocationResolver<'static>,
    default_region: Region,
    location_text: String,
    profile: WeatherProfile,
    page: PageKind,
}

impl CardSession {
    /// Start on `default_region` with its synthetic profile
    pub fn new(source: WeatherSource, default_region: Region) -> Self {
        Self {
            source,
            resolver: LocationResolver::default(),
            default_region,
            location_text: default_region.name().to_string(),
            profile: synthetic::generate(default_region),
            page: PageKind::Style,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let default_region = Region::from_name(config.location.default_region.trim())
            .ok_or_else(|| ConfigError::UnknownRegion(config.location.default_region.clone()))?;
        let source = WeatherSource::from_config(&config.weather)?;
        Ok(Self::new(source, default_region))
    }

    /// Resolve `text`, load its weather and go back to the first page.
    ///
    /// Unresolvable text falls back to the default region. A remote source
    /// that comes back empty is replaced by the synthetic profile.
    pub async fn search(&mut self, text: &str) -> Region {
        let region = match self.resolver.resolve(text) {
            Some(region) => region,
            None => {
                tracing::info!(
                    query = text,
                    fallback = %self.default_region,
                    "Location unresolved, using default region"
                );
                self.default_region
            }
        };

        self.profile = match self.source.profile_for(region).await {
            Some(profile) => profile,
            None => {
                tracing::warn!(
                    region = %region,
                    "Weather source returned nothing, using synthetic profile"
                );
                synthetic::generate(region)
            }
        };
        self.location_text = region.name().to_string();
        self.page = PageKind::Style;
        region
    }

    /// Move to the next page, wrapping after the last
    pub fn next_page(&mut self) -> PageKind {
        self.page = self.page.next();
        self.page
    }

    pub fn page(&self) -> ContentPage {
        content::derive_page(&self.profile, self.page)
    }

    /// Page at a raw index, as received from a UI shell
    pub fn page_at(&self, index: i64) -> Result<ContentPage, AppError> {
        Ok(content::derive(&self.profile, index)?)
    }

    pub fn page_kind(&self) -> PageKind {
        self.page
    }

    pub fn theme(&self) -> ThemeTokens {
        theme::theme_for(Some(self.profile.condition))
    }

    pub fn profile(&self) -> &WeatherProfile {
        &self.profile
    }

    /// Canonical name of the last resolved region
    pub fn location_text(&self) -> &str {
        &self.location_text
    }

    pub fn source(&self) -> &WeatherSource {
        &self.source
    }
}
