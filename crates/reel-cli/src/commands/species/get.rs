use reel_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(code: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let species = ctx
        .service
        .get_species(code)
        .await?
        .ok_or_else(|| CoreError::not_found("species", code))?;
    output(&species, flags.format)
}
