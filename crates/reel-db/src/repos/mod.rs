//! Repository modules reading the reference tables.
//!
//! Each module adds methods to `RegulationService` via `impl RegulationService` blocks.

pub mod health;
pub mod quota;
pub mod species;
pub mod zone;
