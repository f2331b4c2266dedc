use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A spot-level override for one species.
///
/// Limit columns are free text: `"10"`, `"No Limit"`, `"2 Litre"`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpotQuota {
    pub fishing_spot: String,
    pub species: String,
    pub daily_limit: Option<String>,
    pub min_size_cm: Option<String>,
    pub max_size_cm: Option<String>,
}

/// An area-wide default for one species.
///
/// `area_desc` is matched loosely against `Zone::area` and is not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneralQuota {
    pub area_desc: String,
    pub species: String,
    pub daily_limit: Option<String>,
    pub min_size_cm: Option<String>,
    pub max_size_cm: Option<String>,
}
