//! Bulk loading of reference data from a JSON dataset.
//!
//! The store is read-only during lookups; this is the one write path, used
//! to seed local databases and test fixtures.

use std::path::Path;

use reel_core::entities::{GeneralQuota, SpeciesStatus, SpotQuota, Zone};
use reel_core::responses::ImportSummary;
use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;
use crate::service::RegulationService;

/// Contents of all four reference tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub spot_quotas: Vec<SpotQuota>,
    #[serde(default)]
    pub general_quotas: Vec<GeneralQuota>,
    #[serde(default)]
    pub species: Vec<SpeciesStatus>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the JSON does not match the
    /// dataset shape.
    pub fn from_json_str(json: &str) -> Result<Self, DatabaseError> {
        serde_json::from_str(json)
            .map_err(|e| DatabaseError::InvalidState(format!("invalid dataset: {e}")))
    }

    /// Read and parse a dataset file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the file cannot be read, or
    /// `DatabaseError::InvalidState` if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self, DatabaseError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// How an import treats rows already in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Upsert zones and species; append quota rows.
    #[default]
    Append,
    /// Empty all four tables first.
    Replace,
}

impl RegulationService {
    /// Load a dataset in one transaction.
    ///
    /// Zones and species are upserted by key. Quota rows have no key and are
    /// appended, so importing the same file twice in `Append` mode leaves
    /// duplicates that the merge resolves last-write-wins.
    pub async fn import_dataset(
        &self,
        dataset: &Dataset,
        mode: ImportMode,
    ) -> Result<ImportSummary, DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        if mode == ImportMode::Replace {
            tx.execute_batch(
                "DELETE FROM quotas_spot;
                 DELETE FROM quotas_general;
                 DELETE FROM zones;
                 DELETE FROM fish;",
            )
            .await?;
        }

        for zone in &dataset.zones {
            tx.execute(
                "INSERT INTO zones (fishing_spot, area) VALUES (?1, ?2)
                 ON CONFLICT(fishing_spot) DO UPDATE SET area = ?2",
                libsql::params![zone.code.as_str(), zone.area.as_deref()],
            )
            .await?;
        }

        for quota in &dataset.spot_quotas {
            tx.execute(
                "INSERT INTO quotas_spot
                 (fishing_spot, species, daily_limit, min_size_cm, max_size_cm)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    quota.fishing_spot.as_str(),
                    quota.species.as_str(),
                    quota.daily_limit.as_deref(),
                    quota.min_size_cm.as_deref(),
                    quota.max_size_cm.as_deref(),
                ],
            )
            .await?;
        }

        for quota in &dataset.general_quotas {
            tx.execute(
                "INSERT INTO quotas_general
                 (area_desc, species, daily_limit, min_size_cm, max_size_cm)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    quota.area_desc.as_str(),
                    quota.species.as_str(),
                    quota.daily_limit.as_deref(),
                    quota.min_size_cm.as_deref(),
                    quota.max_size_cm.as_deref(),
                ],
            )
            .await?;
        }

        for status in &dataset.species {
            tx.execute(
                "INSERT INTO fish (species, endangered_status, extinction_risk, image, sources)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(species) DO UPDATE SET
                   endangered_status = ?2, extinction_risk = ?3, image = ?4, sources = ?5",
                libsql::params![
                    status.species.as_str(),
                    status.endangered_status.as_deref(),
                    status.extinction_risk.as_deref(),
                    status.image.as_deref(),
                    status.sources.as_deref(),
                ],
            )
            .await?;
        }

        tx.commit().await?;

        let summary = ImportSummary {
            zones: dataset.zones.len(),
            spot_quotas: dataset.spot_quotas.len(),
            general_quotas: dataset.general_quotas.len(),
            species: dataset.species.len(),
        };
        tracing::info!(
            zones = summary.zones,
            spot_quotas = summary.spot_quotas,
            general_quotas = summary.general_quotas,
            species = summary.species,
            ?mode,
            "dataset imported"
        );
        Ok(summary)
    }
}
