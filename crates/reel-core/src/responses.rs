//! Response shapes returned by the service layer and rendered by `reel`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ClassifiedSpecies, EffectiveRule};
use crate::enums::Classification;

/// Per-bucket record counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SnapshotCounts {
    pub endangered: usize,
    pub invasive: usize,
    pub general: usize,
}

/// Header of a zone snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SnapshotMeta {
    pub zone: String,
    pub area: Option<String>,
    pub counts: SnapshotCounts,
}

/// Classified records, one list per bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SnapshotGroups {
    pub endangered: Vec<ClassifiedSpecies>,
    pub invasive: Vec<ClassifiedSpecies>,
    pub general: Vec<ClassifiedSpecies>,
}

impl SnapshotGroups {
    pub(crate) fn bucket_mut(
        &mut self,
        classification: Classification,
    ) -> &mut Vec<ClassifiedSpecies> {
        match classification {
            Classification::Endangered => &mut self.endangered,
            Classification::Invasive => &mut self.invasive,
            Classification::General => &mut self.general,
        }
    }

    /// Total records across buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.endangered.len() + self.invasive.len() + self.general.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every species with a rule in a zone, bucketed by conservation status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ZoneSnapshot {
    pub meta: SnapshotMeta,
    pub groups: SnapshotGroups,
}

/// Response from `reel rules`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RulesResponse {
    pub etag: String,
    /// `true` when the caller's `If-None-Match` matched; `rules` is then empty.
    pub not_modified: bool,
    pub rules: Vec<EffectiveRule>,
}

/// Response from `reel health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub ok: bool,
    /// `local` or `remote`.
    pub source: String,
}

/// Response from `reel import`: rows inserted per table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportSummary {
    pub zones: usize,
    pub spot_quotas: usize,
    pub general_quotas: usize,
    pub species: usize,
}
