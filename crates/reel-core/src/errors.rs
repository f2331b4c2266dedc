//! Cross-cutting error types for Reel.
//!
//! Storage failures are defined in `reel-db` as `DatabaseError`. The CLI
//! converges both into `anyhow` at the edge.

use thiserror::Error;

/// Errors that can be raised by any Reel crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A lookup returned no result (unknown zone, unknown species, or an
    /// empty filtered merge).
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (malformed date, bad parameter).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
