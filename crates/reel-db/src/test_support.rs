//! Shared test utilities for reel-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::import::{Dataset, ImportMode};
    use crate::service::RegulationService;
    use crate::{MEMORY_PATH, ReelDb};

    const FIXTURE: &str = include_str!("../tests/fixtures/victoria.json");

    /// The Victorian sample dataset shared with the integration tests.
    pub fn fixture_dataset() -> Dataset {
        Dataset::from_json_str(FIXTURE).unwrap()
    }

    /// Empty in-memory service.
    pub async fn test_service() -> RegulationService {
        let db = ReelDb::open_local(MEMORY_PATH).await.unwrap();
        RegulationService::from_db(db)
    }

    /// In-memory service loaded with [`fixture_dataset`].
    pub async fn seeded_service() -> RegulationService {
        let svc = test_service().await;
        svc.import_dataset(&fixture_dataset(), ImportMode::Append)
            .await
            .unwrap();
        svc
    }

    /// In-memory service loaded with a custom dataset.
    pub async fn service_with(dataset: &Dataset) -> RegulationService {
        let svc = test_service().await;
        svc.import_dataset(dataset, ImportMode::Append).await.unwrap();
        svc
    }
}
