#[path = "species/get.rs"]
mod get;
#[path = "species/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SpeciesCommands;
use crate::context::AppContext;

/// Handle `reel species`.
pub async fn handle(
    action: &SpeciesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SpeciesCommands::List { limit } => list::run(*limit, ctx, flags).await,
        SpeciesCommands::Get { code } => get::run(code, ctx, flags).await,
    }
}
