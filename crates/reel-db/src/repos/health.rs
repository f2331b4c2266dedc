//! Store liveness and the regulation version marker.

use reel_core::responses::HealthResponse;
use reel_core::version::CURRENT_VERSION;

use crate::error::DatabaseError;
use crate::service::RegulationService;

impl RegulationService {
    /// Round-trip `SELECT 1` against the store.
    pub async fn ping(&self) -> Result<HealthResponse, DatabaseError> {
        let mut rows = self.db().conn().query("SELECT 1", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let ok = row.get::<i64>(0)? == 1;
        Ok(HealthResponse {
            ok,
            source: if self.db().is_remote() { "remote" } else { "local" }.to_string(),
        })
    }

    /// Regulation version of the loaded data.
    ///
    /// The tables carry no version column, so this is always
    /// [`CURRENT_VERSION`]. It is async so callers are already shaped for a
    /// store that does track versions.
    #[allow(clippy::unused_async)]
    pub async fn current_version(&self) -> Result<u32, DatabaseError> {
        Ok(CURRENT_VERSION)
    }
}
