use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named fishing spot and the broader area it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Zone {
    /// Spot name, e.g. `Cape Liptrap Coastal Park`. Case-sensitive key.
    pub code: String,
    /// Geographic area label, e.g. `Gippsland`.
    pub area: Option<String>,
}
