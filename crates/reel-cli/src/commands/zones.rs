use reel_core::entities::Zone;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ZoneListResponse {
    zones: Vec<Zone>,
}

/// Handle `reel zones`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let zones = ctx.service.list_zones().await?;
    output(&ZoneListResponse { zones }, flags.format)
}
