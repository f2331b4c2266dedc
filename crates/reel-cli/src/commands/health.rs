use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let health = ctx.service.ping().await?;
    output(&health, flags.format)
}
