use anyhow::Context;
use reel_config::ReelConfig;
use reel_db::service::RegulationService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: RegulationService,
    pub config: ReelConfig,
}

impl AppContext {
    /// Open the regulation store selected by flags and config.
    ///
    /// `--db` always wins and opens a local file; the `[database]` section
    /// is not consulted, so an incomplete one is only reported. Otherwise the
    /// section must validate, and a fully configured remote is preferred over
    /// the configured local path.
    pub async fn init(config: ReelConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let service = if let Some(path) = flags.db.as_deref() {
            if let Err(error) = config.database.validate() {
                tracing::warn!(%error, "ignoring [database] config, --db is set");
            }
            RegulationService::new_local(path)
                .await
                .with_context(|| format!("failed to open database at {path}"))?
        } else {
            config
                .database
                .validate()
                .context("invalid [database] configuration")?;
            if config.database.is_remote() {
                RegulationService::new_remote(&config.database.url, &config.database.auth_token)
                    .await
                    .with_context(|| format!("failed to connect to {}", config.database.url))?
            } else {
                RegulationService::new_local(&config.database.path)
                    .await
                    .with_context(|| {
                        format!("failed to open database at {}", config.database.path)
                    })?
            }
        };

        tracing::debug!(remote = service.db().is_remote(), "regulation store ready");
        Ok(Self { service, config })
    }
}

#[cfg(test)]
mod tests {
    use reel_config::ConfigError;

    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags(db: Option<String>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            db,
            color: ColorMode::Never,
        }
    }

    fn half_remote() -> ReelConfig {
        let mut config = ReelConfig::default();
        config.database.url = "libsql://regs-vic.turso.io".to_string();
        config
    }

    #[tokio::test]
    async fn db_flag_ignores_incomplete_remote_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("reel.db").to_string_lossy().into_owned();

        let ctx = AppContext::init(half_remote(), &flags(Some(path)))
            .await
            .unwrap();
        assert!(!ctx.service.db().is_remote());
        assert!(ctx.service.list_zones().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn incomplete_remote_config_is_rejected_without_db_flag() {
        let error = AppContext::init(half_remote(), &flags(None))
            .await
            .err()
            .unwrap();
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidValue { .. })
        ));
    }

    #[tokio::test]
    async fn configured_local_path_is_opened() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut config = ReelConfig::default();
        config.database.path = tmp.path().join("regs.db").to_string_lossy().into_owned();

        let ctx = AppContext::init(config, &flags(None)).await.unwrap();
        assert!(!ctx.service.db().is_remote());
        assert!(tmp.path().join("regs.db").exists());
    }
}
