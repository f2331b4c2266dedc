use reel_core::errors::CoreError;
use reel_core::responses::RulesResponse;
use reel_core::version::{is_not_modified, rules_etag};
use reel_db::service::RegulationService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RulesArgs;
use crate::commands::shared::date::parse_on_date;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel rules`.
pub async fn handle(
    args: &RulesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = resolve(args, &ctx.service).await?;
    output(&response, flags.format)
}

/// Zone check, change token, then lookup.
///
/// A matching `--if-none-match` returns before any quota is read. An empty
/// result is reported as not found, with a message that says which lookup
/// came back empty.
async fn resolve(
    args: &RulesArgs,
    service: &RegulationService,
) -> anyhow::Result<RulesResponse> {
    let zone = args.zone.as_str();
    let species = args
        .species
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let on_date = args.on_date.as_deref().filter(|d| !d.is_empty());
    if let Some(raw) = on_date {
        parse_on_date(raw)?;
    }

    if !service.zone_exists(zone).await? {
        return Err(CoreError::not_found("zone", zone).into());
    }

    let version = service.current_version().await?;
    let etag = rules_etag(version, zone, species, on_date);
    if is_not_modified(args.if_none_match.as_deref(), &etag) {
        tracing::debug!(%etag, "rules not modified");
        return Ok(RulesResponse {
            etag,
            not_modified: true,
            rules: Vec::new(),
        });
    }

    let rules = if let Some(species) = species {
        let rule = service
            .species_rule(zone, species)
            .await?
            .ok_or_else(|| CoreError::not_found("rule", format!("{species} in {zone}")))?;
        vec![rule]
    } else {
        let rules = service.zone_rules(zone, None).await?;
        if rules.is_empty() {
            return Err(CoreError::not_found("rules for zone", zone).into());
        }
        rules
    };

    Ok(RulesResponse {
        etag,
        not_modified: false,
        rules,
    })
}
