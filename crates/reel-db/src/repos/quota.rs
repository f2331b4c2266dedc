//! Quota source reader: spot and general quota rows.
//!
//! General reads take a [`GeneralScope`] and always exclude species that
//! already have a spot quota in the requesting zone, so a general row never
//! reaches the merge for a spot-covered species.

use libsql::Value;
use reel_core::entities::{GeneralQuota, SpotQuota};
use reel_core::merge::{GeneralScope, STATEWIDE_AREA};

use crate::error::DatabaseError;
use crate::service::RegulationService;

const SPOT_COLS: &str = "fishing_spot, species, daily_limit, min_size_cm, max_size_cm";

const GENERAL_COLS: &str =
    "qg.area_desc, qg.species, qg.daily_limit, qg.min_size_cm, qg.max_size_cm";

fn row_to_spot(row: &libsql::Row) -> Result<SpotQuota, DatabaseError> {
    Ok(SpotQuota {
        fishing_spot: row.get::<String>(0)?,
        species: row.get::<String>(1)?,
        daily_limit: row.get::<Option<String>>(2)?,
        min_size_cm: row.get::<Option<String>>(3)?,
        max_size_cm: row.get::<Option<String>>(4)?,
    })
}

fn row_to_general(row: &libsql::Row) -> Result<GeneralQuota, DatabaseError> {
    Ok(GeneralQuota {
        area_desc: row.get::<String>(0)?,
        species: row.get::<String>(1)?,
        daily_limit: row.get::<Option<String>>(2)?,
        min_size_cm: row.get::<Option<String>>(3)?,
        max_size_cm: row.get::<Option<String>>(4)?,
    })
}

/// SQL predicate on `qg.area_desc` for one scope. Pushes its bind value.
///
/// Fuzzy uses `instr`, which is case-sensitive and treats `%` and `_`
/// literally, unlike `LIKE`.
fn scope_predicate(scope: GeneralScope<'_>, params: &mut Vec<Value>) -> String {
    let (sql, bind) = match scope {
        GeneralScope::Exact(area) => ("qg.area_desc = ?", area),
        GeneralScope::Fuzzy(area) => ("instr(qg.area_desc, ?) > 0", area),
        GeneralScope::Statewide => ("qg.area_desc = ?", STATEWIDE_AREA),
    };
    params.push(Value::Text(bind.to_string()));
    sql.replacen('?', &format!("?{}", params.len()), 1)
}

impl RegulationService {
    /// Spot quotas for a zone, optionally narrowed to one species.
    ///
    /// Ordered by species, then insertion order.
    pub async fn read_spot_quotas(
        &self,
        zone_code: &str,
        species: Option<&str>,
    ) -> Result<Vec<SpotQuota>, DatabaseError> {
        let mut sql = format!("SELECT {SPOT_COLS} FROM quotas_spot WHERE fishing_spot = ?1");
        let mut params = vec![Value::Text(zone_code.to_string())];
        if let Some(species) = species {
            params.push(Value::Text(species.to_string()));
            sql.push_str(&format!(" AND species = ?{}", params.len()));
        }
        sql.push_str(" ORDER BY species, rowid");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_spot(&row)?);
        }
        Ok(results)
    }

    /// General quotas inside `scope`, minus species with a spot quota in
    /// `exclude_zone`.
    ///
    /// Ordered by species, then insertion order.
    pub async fn read_general_quotas(
        &self,
        scope: GeneralScope<'_>,
        species: Option<&str>,
        exclude_zone: &str,
    ) -> Result<Vec<GeneralQuota>, DatabaseError> {
        let mut params = Vec::with_capacity(3);
        let predicate = scope_predicate(scope, &mut params);

        let mut sql = format!("SELECT {GENERAL_COLS} FROM quotas_general qg WHERE {predicate}");
        if let Some(species) = species {
            params.push(Value::Text(species.to_string()));
            sql.push_str(&format!(" AND qg.species = ?{}", params.len()));
        }
        params.push(Value::Text(exclude_zone.to_string()));
        sql.push_str(&format!(
            " AND NOT EXISTS (SELECT 1 FROM quotas_spot qs \
             WHERE qs.fishing_spot = ?{} AND qs.species = qg.species)",
            params.len()
        ));
        sql.push_str(" ORDER BY qg.species, qg.rowid");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_general(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::seeded_service;

    const LIPTRAP: &str = "Cape Liptrap Coastal Park";

    fn spot_species(rows: &[SpotQuota]) -> Vec<&str> {
        rows.iter().map(|r| r.species.as_str()).collect()
    }

    fn general_species(rows: &[GeneralQuota]) -> Vec<&str> {
        rows.iter().map(|r| r.species.as_str()).collect()
    }

    #[test]
    fn scope_predicate_numbers_binds() {
        let mut params = vec![Value::Text("x".into())];
        let sql = scope_predicate(GeneralScope::Fuzzy("Lakes"), &mut params);
        assert_eq!(sql, "instr(qg.area_desc, ?2) > 0");
        assert_eq!(params.len(), 2);

        let mut params = Vec::new();
        let sql = scope_predicate(GeneralScope::Statewide, &mut params);
        assert_eq!(sql, "qg.area_desc = ?1");
        assert!(matches!(&params[..], [Value::Text(area)] if area == STATEWIDE_AREA));
    }

    #[tokio::test]
    async fn spot_quotas_for_zone() {
        let svc = seeded_service().await;
        let rows = svc.read_spot_quotas(LIPTRAP, None).await.unwrap();
        assert_eq!(spot_species(&rows), vec!["Black Bream"]);
        assert_eq!(rows[0].daily_limit.as_deref(), Some("2"));
        assert_eq!(rows[0].max_size_cm.as_deref(), Some("No Limit"));
    }

    #[tokio::test]
    async fn spot_quotas_species_filter() {
        let svc = seeded_service().await;
        assert!(
            svc.read_spot_quotas(LIPTRAP, Some("Snapper"))
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            svc.read_spot_quotas(LIPTRAP, Some("Black Bream"))
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn general_exact_excludes_spot_covered_species() {
        let svc = seeded_service().await;
        let rows = svc
            .read_general_quotas(GeneralScope::Exact("Gippsland"), None, LIPTRAP)
            .await
            .unwrap();
        assert_eq!(general_species(&rows), vec!["Snapper"]);
    }

    #[tokio::test]
    async fn general_exact_without_exclusion_target() {
        let svc = seeded_service().await;
        let rows = svc
            .read_general_quotas(GeneralScope::Exact("Gippsland"), None, "Atlantis")
            .await
            .unwrap();
        assert_eq!(
            general_species(&rows),
            vec!["Black Bream", "Snapper"]
        );
    }

    #[tokio::test]
    async fn general_fuzzy_matches_substring() {
        let svc = seeded_service().await;
        let rows = svc
            .read_general_quotas(GeneralScope::Fuzzy("Lakes"), None, "Atlantis")
            .await
            .unwrap();
        assert!(rows.iter().all(|r| r.area_desc == "Gippsland Lakes"));
        assert_eq!(
            general_species(&rows),
            vec!["Dusky Flathead", "Estuary Perch"]
        );
    }

    #[tokio::test]
    async fn general_fuzzy_is_case_sensitive() {
        let svc = seeded_service().await;
        let rows = svc
            .read_general_quotas(GeneralScope::Fuzzy("lakes"), None, "Atlantis")
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn general_statewide_with_species() {
        let svc = seeded_service().await;
        let rows = svc
            .read_general_quotas(GeneralScope::Statewide, Some("Flathead"), "Portland Bay")
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].area_desc, STATEWIDE_AREA);
        assert_eq!(rows[0].daily_limit.as_deref(), Some("20"));
    }
}
