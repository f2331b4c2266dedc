use reel_config::GeneralConfig;
use reel_core::entities::SpeciesStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SpeciesListResponse {
    species: Vec<SpeciesStatus>,
}

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = catalogue_limit(limit, flags, &ctx.config.general);
    let species = ctx.service.list_species(limit).await?;
    output(&SpeciesListResponse { species }, flags.format)
}

/// `species list --limit`, then the global `--limit`, then `[general] default_limit`.
fn catalogue_limit(local: Option<u32>, flags: &GlobalFlags, general: &GeneralConfig) -> u32 {
    local.or(flags.limit).unwrap_or(general.default_limit)
}
