//! Snapshot assembler (storage-agnostic half).
//!
//! Joins merged rules against species status rows, classifies each species,
//! and buckets the results. Storage reads happen in `reel-db`; this module
//! only shapes what they return.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::classify::classify;
use crate::entities::{ClassifiedSpecies, EffectiveRule, SpeciesStatus, Zone};
use crate::enums::Classification;
use crate::responses::{SnapshotCounts, SnapshotGroups, SnapshotMeta, ZoneSnapshot};

/// Attach status facts and a classification to one rule.
///
/// A species with no status row gets every status field as `None` and is
/// classified `General`. Empty status strings are treated as absent.
#[must_use]
pub fn enrich(rule: EffectiveRule, status: Option<&SpeciesStatus>) -> ClassifiedSpecies {
    let endangered_status = non_empty(status.and_then(|s| s.endangered_status.as_deref()));
    let classification = classify(endangered_status.as_deref());
    let distribution = rule.distribution().map(String::from);

    ClassifiedSpecies {
        extinction_risk: non_empty(status.and_then(|s| s.extinction_risk.as_deref())),
        image: non_empty(status.and_then(|s| s.image.as_deref())),
        sources: non_empty(status.and_then(|s| s.sources.as_deref())),
        endangered_status,
        distribution,
        classification,
        rule,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

/// Build the bucketed snapshot for a resolved zone.
///
/// `statuses` is keyed by species name. Records inside each bucket are
/// ordered with [`locale_cmp`].
#[must_use]
pub fn assemble_snapshot(
    zone: &Zone,
    rules: Vec<EffectiveRule>,
    statuses: &HashMap<String, SpeciesStatus>,
) -> ZoneSnapshot {
    let mut groups = SnapshotGroups::default();
    for rule in rules {
        let status = statuses.get(&rule.species);
        let record = enrich(rule, status);
        groups.bucket_mut(record.classification).push(record);
    }

    for classification in Classification::ALL {
        groups
            .bucket_mut(classification)
            .sort_by(|a, b| locale_cmp(&a.rule.species, &b.rule.species));
    }

    ZoneSnapshot {
        meta: SnapshotMeta {
            zone: zone.code.clone(),
            area: zone.area.clone(),
            counts: SnapshotCounts {
                endangered: groups.endangered.len(),
                invasive: groups.invasive.len(),
                general: groups.general.len(),
            },
        },
        groups,
    }
}

/// Human-oriented string ordering.
///
/// Compares case-insensitively first, then puts lowercase before uppercase
/// on ties, so `"flathead" < "Flathead" < "gurnard"`.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}
