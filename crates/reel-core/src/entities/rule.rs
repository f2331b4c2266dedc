use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Classification, MatchTier, RuleSource};

/// The single regulation that applies to a species in a zone after merge.
///
/// Built fresh per request from the quota tables. Field names are part of
/// the wire contract consumed by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EffectiveRule {
    pub species: String,
    pub zone_code: String,
    pub area: Option<String>,
    pub daily_limit: Option<String>,
    pub size_min_cm: Option<String>,
    pub size_max_cm: Option<String>,
    pub source: RuleSource,
    /// Placeholder kept for older clients; the store has no seasonal data.
    pub seasonal_limit: Option<String>,
    pub season_window_start: Option<String>,
    pub season_window_end: Option<String>,
    pub reg_version: u32,
    #[serde(rename = "_match")]
    pub match_tier: MatchTier,
    /// `area_desc` of the general row this rule came from. `None` for spot rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_desc: Option<String>,
}

impl EffectiveRule {
    /// Area descriptor shown as the rule's distribution.
    ///
    /// General rules report the area label they matched on, spot rules fall
    /// back to the zone's own area.
    #[must_use]
    pub fn distribution(&self) -> Option<&str> {
        self.area_desc.as_deref().or(self.area.as_deref())
    }
}

/// An effective rule joined with the species' conservation facts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClassifiedSpecies {
    #[serde(flatten)]
    pub rule: EffectiveRule,
    pub endangered_status: Option<String>,
    pub extinction_risk: Option<String>,
    pub image: Option<String>,
    pub sources: Option<String>,
    pub distribution: Option<String>,
    pub classification: Classification,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(area_desc: Option<&str>) -> EffectiveRule {
        EffectiveRule {
            species: "Snapper".into(),
            zone_code: "Cape Liptrap Coastal Park".into(),
            area: Some("Gippsland".into()),
            daily_limit: Some("10".into()),
            size_min_cm: Some("30".into()),
            size_max_cm: Some("60".into()),
            source: RuleSource::General,
            seasonal_limit: None,
            season_window_start: None,
            season_window_end: None,
            reg_version: 1,
            match_tier: MatchTier::GeneralFuzzy,
            area_desc: area_desc.map(String::from),
        }
    }

    #[test]
    fn distribution_prefers_area_desc() {
        assert_eq!(
            rule(Some("Gippsland Lakes")).distribution(),
            Some("Gippsland Lakes")
        );
        assert_eq!(rule(None).distribution(), Some("Gippsland"));
    }

    #[test]
    fn match_tier_is_serialized_as_underscore_match() {
        let json = serde_json::to_value(rule(None)).unwrap();
        assert_eq!(json["_match"], "general:fuzzy");
        assert!(json.get("match_tier").is_none());
        assert!(json.get("area_desc").is_none());
    }
}
