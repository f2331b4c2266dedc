//! Service layer over the regulation store.
//!
//! `RegulationService` wraps `ReelDb`. Every repo, resolution, and import
//! method is implemented as `impl RegulationService` in its own module.

use crate::ReelDb;
use crate::error::DatabaseError;

/// Read-side entry point for zone, quota, and species lookups.
///
/// Holds no mutable state beyond the connection, so one instance can serve
/// any number of sequential requests.
pub struct RegulationService {
    db: ReelDb,
}

impl RegulationService {
    /// Create a service over a local database file, or `":memory:"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ReelDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the remote cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = ReelDb::open_remote(url, auth_token).await?;
        Ok(Self { db })
    }

    /// Create from an existing `ReelDb` (for testing).
    #[must_use]
    pub const fn from_db(db: ReelDb) -> Self {
        Self { db }
    }

    /// Access the underlying database.
    #[must_use]
    pub const fn db(&self) -> &ReelDb {
        &self.db
    }
}
