use std::path::PathBuf;

use reel_config::{DatabaseConfig, ReelConfig};

use crate::cli::GlobalFlags;

/// Load layered configuration, reading `.env` from the working directory first.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ReelConfig> {
    let config = ReelConfig::load_with_dotenv()?;
    let files = ReelConfig::config_files();
    if uses_default_store(&config, &files, flags) {
        tracing::warn!(
            path = %config.database.path,
            "no config file or REEL_ database settings found, using the default local store"
        );
    }
    tracing::debug!(
        remote = config.database.is_remote(),
        path = %config.database.path,
        files = files.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Nothing chose the store: no `--db`, no config file, and the database
/// section still holds its built-in values.
fn uses_default_store(config: &ReelConfig, files: &[PathBuf], flags: &GlobalFlags) -> bool {
    let defaults = DatabaseConfig::default();
    flags.db.is_none()
        && files.is_empty()
        && config.database.path == defaults.path
        && config.database.url.is_empty()
        && config.database.auth_token.is_empty()
}
