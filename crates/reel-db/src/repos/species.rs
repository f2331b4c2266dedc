//! Species status repository.

use std::collections::HashMap;

use libsql::Value;
use reel_core::entities::SpeciesStatus;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, placeholders};
use crate::service::RegulationService;

const SELECT_COLS: &str = "species, endangered_status, extinction_risk, image, sources";

fn row_to_status(row: &libsql::Row) -> Result<SpeciesStatus, DatabaseError> {
    Ok(SpeciesStatus {
        species: row.get::<String>(0)?,
        endangered_status: get_opt_string(row, 1)?,
        extinction_risk: get_opt_string(row, 2)?,
        image: get_opt_string(row, 3)?,
        sources: get_opt_string(row, 4)?,
    })
}

impl RegulationService {
    pub async fn get_species(&self, species: &str) -> Result<Option<SpeciesStatus>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM fish WHERE species = ?1 LIMIT 1"),
                [species],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_status(&row)?)),
            None => Ok(None),
        }
    }

    /// Species status rows ordered by name.
    pub async fn list_species(&self, limit: u32) -> Result<Vec<SpeciesStatus>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM fish ORDER BY species LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_status(&row)?);
        }
        Ok(results)
    }

    /// Status rows for the given names in one query, keyed by species.
    ///
    /// Names without a row are simply missing from the map.
    pub async fn species_statuses(
        &self,
        names: &[String],
    ) -> Result<HashMap<String, SpeciesStatus>, DatabaseError> {
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {SELECT_COLS} FROM fish WHERE species IN ({})",
            placeholders(1, names.len())
        );
        let params: Vec<Value> = names.iter().map(|n| Value::Text(n.clone())).collect();
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut results = HashMap::with_capacity(names.len());
        while let Some(row) = rows.next().await? {
            let status = row_to_status(&row)?;
            results.insert(status.species.clone(), status);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::seeded_service;

    #[tokio::test]
    async fn get_species_reads_status() {
        let svc = seeded_service().await;
        let cod = svc.get_species("Murray Cod").await.unwrap().unwrap();
        assert_eq!(cod.endangered_status.as_deref(), Some("Vulnerable"));
        assert!(svc.get_species("Flathead").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_strings_read_as_none() {
        let svc = seeded_service().await;
        let dusky = svc.get_species("Dusky Flathead").await.unwrap().unwrap();
        assert!(dusky.endangered_status.is_none());
        assert!(dusky.image.is_none());
    }

    #[tokio::test]
    async fn list_species_respects_limit() {
        let svc = seeded_service().await;
        let all = svc.list_species(100).await.unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.species.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        let two = svc.list_species(2).await.unwrap();
        assert_eq!(two.len(), 2);
        assert_eq!(two[0].species, all[0].species);
    }

    #[tokio::test]
    async fn statuses_batch_skips_unknown() {
        let svc = seeded_service().await;
        let names = vec![
            "Snapper".to_string(),
            "European Carp".to_string(),
            "Flathead".to_string(),
        ];
        let map = svc.species_statuses(&names).await.unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("Snapper"));
        assert!(!map.contains_key("Flathead"));
    }

    #[tokio::test]
    async fn statuses_batch_empty_input() {
        let svc = seeded_service().await;
        assert!(svc.species_statuses(&[]).await.unwrap().is_empty());
    }
}
