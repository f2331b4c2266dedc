//! Provenance and classification enums for Reel.
//!
//! `RuleSource` and `Classification` serialize as `snake_case`. `MatchTier`
//! uses the colon-separated tags the frontend already understands
//! (`general:exact`, `general:fuzzy`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RuleSource
// ---------------------------------------------------------------------------

/// Which fact table an effective rule was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    Spot,
    General,
}

impl RuleSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::General => "general",
        }
    }
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatchTier
// ---------------------------------------------------------------------------

/// Debug provenance: which scope produced a rule.
///
/// Informational only. Nothing downstream branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MatchTier {
    #[serde(rename = "spot")]
    Spot,
    #[serde(rename = "general:exact")]
    GeneralExact,
    #[serde(rename = "general:fuzzy")]
    GeneralFuzzy,
    #[serde(rename = "general:statewide")]
    GeneralStatewide,
}

impl MatchTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::GeneralExact => "general:exact",
            Self::GeneralFuzzy => "general:fuzzy",
            Self::GeneralStatewide => "general:statewide",
        }
    }

    /// The fact table this tier reads from.
    #[must_use]
    pub const fn source(self) -> RuleSource {
        match self {
            Self::Spot => RuleSource::Spot,
            Self::GeneralExact | Self::GeneralFuzzy | Self::GeneralStatewide => {
                RuleSource::General
            }
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Conservation bucket a species falls into for display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Endangered,
    Invasive,
    General,
}

impl Classification {
    /// All buckets in display order.
    pub const ALL: [Self; 3] = [Self::Endangered, Self::Invasive, Self::General];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endangered => "endangered",
            Self::Invasive => "invasive",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
