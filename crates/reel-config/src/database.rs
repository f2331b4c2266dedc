//! Storage configuration: a local libSQL file or a remote libSQL/Turso database.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    ".reel/reel.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://regs-myorg.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether remote access has both a URL and a token.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check that the section can be used to open a database.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a remote URL is set without a
    /// token (or the reverse), or if the local path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() != self.auth_token.is_empty() {
            let missing = if self.url.is_empty() {
                "database.url"
            } else {
                "database.auth_token"
            };
            return Err(ConfigError::InvalidValue {
                field: missing.to_string(),
                reason: "remote access needs both url and auth_token".to_string(),
            });
        }
        if !self.is_remote() && self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
