//! Weather-driven advice cards for Japanese regions.
//!
//! Free text is resolved to one of the 47 prefectures, a weather source turns
//! the prefecture into a profile, and the profile is turned into three pages
//! of styling, care and sky advice plus a colour theme.

pub mod content;
pub mod error_mapping;
pub mod gazetteer;
pub mod remote;
pub mod resolver;
pub mod session;
pub mod snapshot;
pub mod source;
pub mod synthetic;
pub mod theme;
pub mod types;

pub use content::{derive, derive_page, ContentPage, Metric, PageKind, RainRisk};
pub use gazetteer::{Alias, Area, Region};
pub use remote::{CodeThresholds, FieldRule, PayloadMapping, RemoteFetcher};
pub use resolver::{resolve, LocationResolver, MatchTier};
pub use session::CardSession;
pub use source::WeatherSource;
pub use synthetic::generate;
pub use theme::{theme_for, theme_for_label, ThemeTokens};
pub use types::*;
