//! Zone resolver: fishing spot code to zone record.
//!
//! Codes are matched exactly and case-sensitively.

use reel_core::entities::Zone;

use crate::error::DatabaseError;
use crate::service::RegulationService;

const SELECT_COLS: &str = "fishing_spot, area";

fn row_to_zone(row: &libsql::Row) -> Result<Zone, DatabaseError> {
    Ok(Zone {
        code: row.get::<String>(0)?,
        area: row.get::<Option<String>>(1)?,
    })
}

impl RegulationService {
    /// Look up one zone. `None` when no zone has exactly this code.
    pub async fn get_zone(&self, code: &str) -> Result<Option<Zone>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM zones WHERE fishing_spot = ?1 LIMIT 1"),
                [code],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_zone(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn zone_exists(&self, code: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM zones WHERE fishing_spot = ?1 LIMIT 1", [code])
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// All zones ordered by code.
    pub async fn list_zones(&self) -> Result<Vec<Zone>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM zones ORDER BY fishing_spot"),
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_zone(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{seeded_service, test_service};

    #[tokio::test]
    async fn get_zone_returns_area() {
        let svc = seeded_service().await;
        let zone = svc.get_zone("Cape Liptrap Coastal Park").await.unwrap().unwrap();
        assert_eq!(zone.code, "Cape Liptrap Coastal Park");
        assert_eq!(zone.area.as_deref(), Some("Gippsland"));
    }

    #[tokio::test]
    async fn get_zone_keeps_null_area() {
        let svc = seeded_service().await;
        let zone = svc.get_zone("Portland Bay").await.unwrap().unwrap();
        assert!(zone.area.is_none());
    }

    #[tokio::test]
    async fn zone_codes_are_case_sensitive() {
        let svc = seeded_service().await;
        assert!(svc.get_zone("cape liptrap coastal park").await.unwrap().is_none());
        assert!(!svc.zone_exists("CAPE LIPTRAP COASTAL PARK").await.unwrap());
        assert!(svc.zone_exists("Cape Liptrap Coastal Park").await.unwrap());
    }

    #[tokio::test]
    async fn unknown_zone_is_absent() {
        let svc = seeded_service().await;
        assert!(svc.get_zone("Atlantis").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_zones_is_ordered() {
        let svc = seeded_service().await;
        let codes: Vec<String> = svc
            .list_zones()
            .await
            .unwrap()
            .into_iter()
            .map(|z| z.code)
            .collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert!(!codes.is_empty());
    }

    #[tokio::test]
    async fn list_zones_empty_store() {
        let svc = test_service().await;
        assert!(svc.list_zones().await.unwrap().is_empty());
    }
}
