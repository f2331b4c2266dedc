use clap::Subcommand;

/// Species catalogue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SpeciesCommands {
    /// List species with their conservation status.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get one species by exact name.
    Get { code: String },
}
