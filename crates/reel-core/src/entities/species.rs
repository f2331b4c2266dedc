use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Conservation facts for one species (the `fish` table).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpeciesStatus {
    pub species: String,
    /// Free text, classified by [`crate::classify::classify`].
    pub endangered_status: Option<String>,
    pub extinction_risk: Option<String>,
    pub image: Option<String>,
    pub sources: Option<String>,
}
