use reel_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SnapshotArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel snapshot`.
///
/// With `--species`, prints the single enriched record instead of the
/// bucketed zone view.
pub async fn handle(
    args: &SnapshotArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let zone = args.zone.as_str();
    let species = args
        .species
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    match species {
        Some(species) => {
            let record = ctx
                .service
                .species_snapshot(zone, species)
                .await?
                .ok_or_else(|| CoreError::not_found("rule", format!("{species} in {zone}")))?;
            output(&record, flags.format)
        }
        None => {
            let snapshot = ctx
                .service
                .zone_snapshot(zone)
                .await?
                .ok_or_else(|| CoreError::not_found("zone", zone))?;
            output(&snapshot, flags.format)
        }
    }
}
