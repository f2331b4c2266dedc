use std::path::Path;

use reel_db::import::{Dataset, ImportMode};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel import`.
pub async fn handle(
    args: &ImportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dataset = Dataset::from_path(Path::new(&args.file))?;
    let mode = if args.replace {
        ImportMode::Replace
    } else {
        ImportMode::Append
    };
    let summary = ctx.service.import_dataset(&dataset, mode).await?;
    output(&summary, flags.format)
}
