//! Entity structs for Reel.
//!
//! The first four map one-to-one onto storage tables and are read-only from
//! this system's point of view. `EffectiveRule` and `ClassifiedSpecies` are
//! derived on every request and never persisted.

mod quota;
mod rule;
mod species;
mod zone;

pub use quota::{GeneralQuota, SpotQuota};
pub use rule::{ClassifiedSpecies, EffectiveRule};
pub use species::SpeciesStatus;
pub use zone::Zone;
