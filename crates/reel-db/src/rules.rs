//! Rule resolution for a zone: spot quotas plus the first general scope
//! that yields rows, merged into one effective rule per species.

use reel_core::entities::{EffectiveRule, Zone};
use reel_core::merge::{first_matching_scope, general_scopes, merge_rules};
use tracing::debug;

use crate::error::DatabaseError;
use crate::service::RegulationService;

/// Blank species filters mean "no filter".
fn species_filter(species: Option<&str>) -> Option<&str> {
    species.map(str::trim).filter(|s| !s.is_empty())
}

impl RegulationService {
    /// Effective rules for a zone, sorted by species.
    ///
    /// Returns an empty list for an unknown zone; callers that need to tell
    /// "unknown" from "no rules" check [`Self::zone_exists`].
    #[tracing::instrument(skip(self))]
    pub async fn zone_rules(
        &self,
        zone_code: &str,
        species: Option<&str>,
    ) -> Result<Vec<EffectiveRule>, DatabaseError> {
        let Some(zone) = self.get_zone(zone_code).await? else {
            debug!("unknown zone");
            return Ok(Vec::new());
        };
        self.rules_for_zone(&zone, species).await
    }

    /// The single effective rule for one species in one zone.
    ///
    /// A blank species names nothing, so it has no rule.
    #[tracing::instrument(skip(self))]
    pub async fn species_rule(
        &self,
        zone_code: &str,
        species: &str,
    ) -> Result<Option<EffectiveRule>, DatabaseError> {
        let Some(species) = species_filter(Some(species)) else {
            debug!("blank species");
            return Ok(None);
        };
        let rules = self.zone_rules(zone_code, Some(species)).await?;
        Ok(rules.into_iter().next())
    }

    pub(crate) async fn rules_for_zone(
        &self,
        zone: &Zone,
        species: Option<&str>,
    ) -> Result<Vec<EffectiveRule>, DatabaseError> {
        let species = species_filter(species);
        let spot = self.read_spot_quotas(&zone.code, species).await?;
        debug!(rows = spot.len(), "spot quotas read");

        let scopes = general_scopes(zone.area.as_deref());
        let general = first_matching_scope(&scopes, move |scope| async move {
            let rows = self.read_general_quotas(scope, species, &zone.code).await?;
            debug_assert!(rows.iter().all(|r| scope.matches(&r.area_desc)));
            debug!(tier = %scope.tier(), rows = rows.len(), "general scope queried");
            Ok::<_, DatabaseError>(rows)
        })
        .await?;

        match &general {
            Some(matched) => debug!(tier = %matched.tier, "general scope matched"),
            None => debug!("no general scope matched"),
        }

        Ok(merge_rules(zone, spot, general))
    }
}
