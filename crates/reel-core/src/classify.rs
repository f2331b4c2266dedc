//! Species classifier.
//!
//! Buckets a free-text conservation status into one of three
//! [`Classification`]s. The vocabulary is a fixed closed set: anything not
//! listed (including a missing status) lands in `General` without error.

use crate::enums::Classification;

const INVASIVE: &[&str] = &["invasive"];

const ENDANGERED: &[&str] = &[
    "critically endangered",
    "endangered",
    "threatened",
    "vulnerable",
    "near threatened",
    "regionally extinct",
];

/// Trim, lowercase, and collapse internal whitespace runs to one space.
#[must_use]
pub fn normalize_status(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify a conservation status string.
#[must_use]
pub fn classify(status: Option<&str>) -> Classification {
    let Some(status) = status else {
        return Classification::General;
    };
    let normalized = normalize_status(status);
    if INVASIVE.contains(&normalized.as_str()) {
        Classification::Invasive
    } else if ENDANGERED.contains(&normalized.as_str()) {
        Classification::Endangered
    } else {
        Classification::General
    }
}
