//! # reel-core
//!
//! Core types and pure resolution logic for Reel, the fishing-regulation
//! lookup service.
//!
//! This crate provides the foundational pieces shared by every other crate:
//! - Entity structs for the reference tables (zones, quotas, species status)
//! - Derived shapes (`EffectiveRule`, `ClassifiedSpecies`)
//! - Enums for rule provenance and conservation classification
//! - The species classifier
//! - The storage-agnostic half of the rule merge engine
//! - The snapshot assembler (join, classify, bucket)
//! - Change-token helpers and response types
//!
//! Nothing in here performs I/O. Storage lives in `reel-db`.

pub mod classify;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod merge;
pub mod responses;
pub mod snapshot;
pub mod version;
