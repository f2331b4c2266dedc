//! Regulation version marker and change tokens.
//!
//! The reference tables carry no versioning, so the marker is a constant.
//! Callers still build weak ETags from it so a future versioned store can
//! invalidate client caches without changing the token format.

/// Current regulation version reported by the store.
pub const CURRENT_VERSION: u32 = 1;

/// Build the weak change token for a rules request.
///
/// Absent parts render as empty strings:
/// `W/"rules-v1-Cape Liptrap Coastal Park-Snapper-"`.
#[must_use]
pub fn rules_etag(
    version: u32,
    zone_code: &str,
    species: Option<&str>,
    on_date: Option<&str>,
) -> String {
    format!(
        "W/\"rules-v{version}-{zone_code}-{}-{}\"",
        species.unwrap_or_default(),
        on_date.unwrap_or_default()
    )
}

/// Whether a client's `If-None-Match` value lets the request short-circuit.
#[must_use]
pub fn is_not_modified(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|candidate| !candidate.is_empty() && candidate == etag)
}
