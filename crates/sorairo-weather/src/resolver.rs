//! Free-text place name → canonical region.
//!
//! Tiers are tried in order and the first hit wins:
//! 1. exact alias
//! 2. exact region name
//! 3. prefix over aliases (first in declaration order)
//! 4. prefix over region names (first in canonical order)
//! 5. substring over aliases (longest token, ties to the earlier one)
//! 6. substring over region names (same rule)
//!
//! The prefix tiers deliberately take the first declared match rather than
//! the longest one; existing searches depend on that.

use serde::Serialize;

use crate::gazetteer::{self, Alias, Region};

/// Which tier produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    ExactAlias,
    ExactRegion,
    AliasPrefix,
    RegionPrefix,
    AliasSubstring,
    RegionSubstring,
}

/// Resolver over an alias table and the canonical region list
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver<'a> {
    aliases: &'a [Alias],
}

impl Default for LocationResolver<'static> {
    fn default() -> Self {
        Self::new(gazetteer::aliases())
    }
}

impl<'a> LocationResolver<'a> {
    pub fn new(aliases: &'a [Alias]) -> Self {
        Self { aliases }
    }

    /// Resolve `input` to a region, `None` when nothing matches
    pub fn resolve(&self, input: &str) -> Option<Region> {
        self.resolve_with_tier(input).map(|(region, _)| region)
    }

    /// Resolve and report which tier matched
    pub fn resolve_with_tier(&self, input: &str) -> Option<(Region, MatchTier)> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }

        let found = self
            .exact(query)
            .or_else(|| {
                first_prefix(query, self.alias_candidates()).map(|r| (r, MatchTier::AliasPrefix))
            })
            .or_else(|| {
                first_prefix(query, region_candidates()).map(|r| (r, MatchTier::RegionPrefix))
            })
            .or_else(|| {
                longest_substring(query, self.alias_candidates())
                    .map(|r| (r, MatchTier::AliasSubstring))
            })
            .or_else(|| {
                longest_substring(query, region_candidates())
                    .map(|r| (r, MatchTier::RegionSubstring))
            });

        match found {
            Some((region, tier)) => {
                tracing::debug!(query, region = %region, ?tier, "Resolved location");
            }
            None => tracing::debug!(query, "Location unresolved"),
        }

        found
    }

    fn exact(&self, query: &str) -> Option<(Region, MatchTier)> {
        if let Some(alias) = self.aliases.iter().find(|a| a.token == query) {
            return Some((alias.region, MatchTier::ExactAlias));
        }
        Region::from_name(query).map(|r| (r, MatchTier::ExactRegion))
    }

    fn alias_candidates(&self) -> impl Iterator<Item = (&'a str, Region)> {
        let aliases: &'a [Alias] = self.aliases;
        aliases.iter().map(|a| (a.token, a.region))
    }
}

/// Resolve with the built-in alias table
pub fn resolve(input: &str) -> Option<Region> {
    LocationResolver::default().resolve(input)
}

fn region_candidates() -> impl Iterator<Item = (&'static str, Region)> {
    Region::all().map(|r| (r.name(), r))
}

fn first_prefix<'c>(
    query: &str,
    mut candidates: impl Iterator<Item = (&'c str, Region)>,
) -> Option<Region> {
    candidates
        .find(|(token, _)| query.starts_with(token) || token.starts_with(query))
        .map(|(_, region)| region)
}

fn longest_substring<'c>(
    query: &str,
    candidates: impl Iterator<Item = (&'c str, Region)>,
) -> Option<Region> {
    let mut best: Option<(usize, Region)> = None;

    for (token, region) in candidates {
        if !(query.contains(token) || token.contains(query)) {
            continue;
        }
        let len = token.chars().count();
        if best.map_or(true, |(best_len, _)| len > best_len) {
            best = Some((len, region));
        }
    }

    best.map(|(_, region)| region)
}
