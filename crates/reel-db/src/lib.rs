//! # reel-db
//!
//! libSQL storage for Reel's regulation reference data.
//!
//! Holds four read-mostly tables (zones, spot quotas, general quotas,
//! species status) and the I/O half of rule resolution: quota reads per
//! scope, the lazy tier walk, and snapshot assembly.
//!
//! Two storage modes share one code path: a local file (or `:memory:` in
//! tests) and a remote libSQL/Turso database reached over HTTP.

pub mod error;
pub mod helpers;
pub mod import;
mod migrations;
pub mod repos;
pub mod rules;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

/// Path that opens a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

/// Central database handle.
///
/// Wraps a libSQL database and connection. Repo methods live on
/// [`service::RegulationService`], which owns one of these.
pub struct ReelDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl ReelDb {
    /// Open a local database at the given path, creating parent directories.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != MEMORY_PATH {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let reel_db = Self {
            db,
            conn,
            remote: false,
        };
        reel_db.run_migrations().await?;
        tracing::debug!(path, "opened local database");
        Ok(reel_db)
    }

    /// Open a remote libSQL database over HTTP.
    ///
    /// Migrations run here too; every statement is `IF NOT EXISTS`, so an
    /// already-provisioned remote is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let reel_db = Self {
            db,
            conn,
            remote: true,
        };
        reel_db.run_migrations().await?;
        tracing::debug!(url, "opened remote database");
        Ok(reel_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}
