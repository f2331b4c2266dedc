//! Rule merge engine (storage-agnostic half).
//!
//! Resolution for a zone is two-tier: spot quotas for the zone itself, then
//! general quotas found by walking three area scopes in order and stopping
//! at the first one that yields rows:
//!
//! ```text
//! exact      area_desc == zone.area
//! fuzzy      area_desc contains zone.area      (skipped when area is blank)
//! statewide  area_desc == "All Victorian Waters"
//! ```
//!
//! The storage layer excludes spot-covered species from every general read.
//! [`merge_rules`] still lets spot rows overwrite general rows on species
//! collision, so precedence holds even if a read skips that exclusion.

use std::collections::BTreeMap;
use std::future::Future;

use crate::entities::{EffectiveRule, GeneralQuota, SpotQuota, Zone};
use crate::enums::MatchTier;
use crate::version::CURRENT_VERSION;

/// Area label of the statewide fallback rows.
pub const STATEWIDE_AREA: &str = "All Victorian Waters";

/// One general-quota lookup scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralScope<'a> {
    /// `area_desc` equals the zone's area.
    Exact(&'a str),
    /// `area_desc` contains the zone's area as a substring.
    Fuzzy(&'a str),
    /// `area_desc` equals [`STATEWIDE_AREA`].
    Statewide,
}

impl GeneralScope<'_> {
    /// Provenance tag attached to rules found through this scope.
    #[must_use]
    pub const fn tier(self) -> MatchTier {
        match self {
            Self::Exact(_) => MatchTier::GeneralExact,
            Self::Fuzzy(_) => MatchTier::GeneralFuzzy,
            Self::Statewide => MatchTier::GeneralStatewide,
        }
    }

    /// Whether a general row's `area_desc` falls inside this scope.
    ///
    /// Agrees with the SQL predicate the store binds for the same scope.
    #[must_use]
    pub fn matches(self, area_desc: &str) -> bool {
        match self {
            Self::Exact(area) => area_desc == area,
            Self::Fuzzy(area) => !area.is_empty() && area_desc.contains(area),
            Self::Statewide => area_desc == STATEWIDE_AREA,
        }
    }
}

/// Scopes to try for a zone's area, in priority order.
///
/// A missing area has nothing to compare against, so only the statewide
/// scope remains. An empty area keeps the exact scope but drops the fuzzy
/// one, since every string contains the empty string.
#[must_use]
pub fn general_scopes(area: Option<&str>) -> Vec<GeneralScope<'_>> {
    let mut scopes = Vec::with_capacity(3);
    if let Some(area) = area {
        scopes.push(GeneralScope::Exact(area));
        if !area.is_empty() {
            scopes.push(GeneralScope::Fuzzy(area));
        }
    }
    scopes.push(GeneralScope::Statewide);
    scopes
}

/// Rows returned by the first non-empty general scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeMatch {
    pub tier: MatchTier,
    pub rows: Vec<GeneralQuota>,
}

/// Evaluate `scopes` lazily, stopping at the first that yields rows.
///
/// `fetch` is called at most once per scope and never for scopes after the
/// first non-empty one. Returns `None` when every scope is empty.
///
/// # Errors
///
/// Propagates the first error returned by `fetch`.
pub async fn first_matching_scope<'a, F, Fut, E>(
    scopes: &[GeneralScope<'a>],
    mut fetch: F,
) -> Result<Option<ScopeMatch>, E>
where
    F: FnMut(GeneralScope<'a>) -> Fut,
    Fut: Future<Output = Result<Vec<GeneralQuota>, E>>,
{
    for scope in scopes {
        let rows = fetch(*scope).await?;
        if !rows.is_empty() {
            return Ok(Some(ScopeMatch {
                tier: scope.tier(),
                rows,
            }));
        }
    }
    Ok(None)
}

/// Merge general and spot rows into one effective rule per species.
///
/// General rows go in first and spot rows overwrite them, so a spot quota
/// always shadows a general one for the same species. Within a tier a later
/// duplicate replaces an earlier one. Output is sorted by species name.
#[must_use]
pub fn merge_rules(
    zone: &Zone,
    spot: Vec<SpotQuota>,
    general: Option<ScopeMatch>,
) -> Vec<EffectiveRule> {
    let mut merged: BTreeMap<String, EffectiveRule> = BTreeMap::new();

    if let Some(ScopeMatch { tier, rows }) = general {
        for row in rows {
            merged.insert(row.species.clone(), general_rule(zone, row, tier));
        }
    }
    for row in spot {
        merged.insert(row.species.clone(), spot_rule(zone, row));
    }

    merged.into_values().collect()
}

fn spot_rule(zone: &Zone, row: SpotQuota) -> EffectiveRule {
    EffectiveRule {
        species: row.species,
        zone_code: zone.code.clone(),
        area: zone.area.clone(),
        daily_limit: row.daily_limit,
        size_min_cm: row.min_size_cm,
        size_max_cm: row.max_size_cm,
        source: MatchTier::Spot.source(),
        seasonal_limit: None,
        season_window_start: None,
        season_window_end: None,
        reg_version: CURRENT_VERSION,
        match_tier: MatchTier::Spot,
        area_desc: None,
    }
}

fn general_rule(zone: &Zone, row: GeneralQuota, tier: MatchTier) -> EffectiveRule {
    EffectiveRule {
        species: row.species,
        zone_code: zone.code.clone(),
        area: zone.area.clone(),
        daily_limit: row.daily_limit,
        size_min_cm: row.min_size_cm,
        size_max_cm: row.max_size_cm,
        source: tier.source(),
        seasonal_limit: None,
        season_window_start: None,
        season_window_end: None,
        reg_version: CURRENT_VERSION,
        match_tier: tier,
        area_desc: Some(row.area_desc),
    }
}
