use clap::{Args, Subcommand};

use crate::cli::subcommands::SpeciesCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every known fishing zone.
    Zones,
    /// Species catalogue.
    Species {
        #[command(subcommand)]
        action: SpeciesCommands,
    },
    /// Effective bag and size rules for a zone.
    Rules(RulesArgs),
    /// Zone rules grouped by conservation status.
    Snapshot(SnapshotArgs),
    /// Check that the regulation store answers.
    Health,
    /// Load a JSON dataset into the local store.
    Import(ImportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RulesArgs {
    /// Zone code, e.g. "Cape Liptrap Coastal Park" (case-sensitive).
    pub zone: String,
    /// Only the rule for this species.
    #[arg(long)]
    pub species: Option<String>,
    /// Reference date (YYYY-MM-DD). Part of the change token only.
    #[arg(long)]
    pub on_date: Option<String>,
    /// Change token from a previous response; skips the lookup when unchanged.
    #[arg(long)]
    pub if_none_match: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SnapshotArgs {
    /// Zone code (case-sensitive).
    pub zone: String,
    /// Return the single enriched record for this species.
    #[arg(long)]
    pub species: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Path to a dataset JSON file.
    pub file: String,
    /// Empty all tables before loading.
    #[arg(long)]
    pub replace: bool,
}
