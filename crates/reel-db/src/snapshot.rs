//! Snapshot assembly: resolved rules joined with species status.

use reel_core::entities::ClassifiedSpecies;
use reel_core::responses::ZoneSnapshot;
use reel_core::snapshot::{assemble_snapshot, enrich};
use tracing::debug;

use crate::error::DatabaseError;
use crate::service::RegulationService;

impl RegulationService {
    /// Every species with a rule in the zone, bucketed by classification.
    ///
    /// `None` for an unknown zone. A known zone with no rules gets a snapshot
    /// with empty buckets.
    #[tracing::instrument(skip(self))]
    pub async fn zone_snapshot(
        &self,
        zone_code: &str,
    ) -> Result<Option<ZoneSnapshot>, DatabaseError> {
        let Some(zone) = self.get_zone(zone_code).await? else {
            debug!("unknown zone");
            return Ok(None);
        };
        let rules = self.rules_for_zone(&zone, None).await?;
        let names: Vec<String> = rules.iter().map(|r| r.species.clone()).collect();
        let statuses = self.species_statuses(&names).await?;
        debug!(rules = rules.len(), statuses = statuses.len(), "assembling snapshot");

        Ok(Some(assemble_snapshot(&zone, rules, &statuses)))
    }

    /// One species' rule in a zone, with status facts and classification.
    ///
    /// `None` when the zone is unknown or the species has no rule there.
    #[tracing::instrument(skip(self))]
    pub async fn species_snapshot(
        &self,
        zone_code: &str,
        species: &str,
    ) -> Result<Option<ClassifiedSpecies>, DatabaseError> {
        let Some(rule) = self.species_rule(zone_code, species).await? else {
            return Ok(None);
        };
        let status = self.get_species(&rule.species).await?;
        Ok(Some(enrich(rule, status.as_ref())))
    }
}
