//! Persistence gateway for planets.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use planets_core::error::CoreError;
use planets_core::pagination::{PageWindow, Paginated, PaginationMeta};
use planets_core::search::NameFilter;
use planets_core::types::{parse_planet_id, PlanetId};

use crate::models::planet::Planet;
use crate::store::{PlanetStore, StoreError};

/// Time budget applied to each store operation unless overridden.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(8);

/// Message carried by [`CoreError::NotFound`] when a lookup by id misses.
pub const NO_DOCUMENTS: &str = "no documents";

/// Maps planet operations onto [`PlanetStore`] primitives.
///
/// Every call is bounded by `timeout`; exceeding it yields
/// [`CoreError::Timeout`]. Store failures become [`CoreError::Persistence`].
#[derive(Clone)]
pub struct PlanetRepo {
    store: Arc<dyn PlanetStore>,
    timeout: Duration,
}

impl PlanetRepo {
    pub fn new(store: Arc<dyn PlanetStore>) -> Self {
        Self::with_timeout(store, DEFAULT_STORE_TIMEOUT)
    }

    pub fn with_timeout(store: Arc<dyn PlanetStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Insert a fully stamped planet, returning the stored id.
    pub async fn insert(&self, planet: &Planet) -> Result<PlanetId, CoreError> {
        self.bounded("insert", self.store.insert_one(planet)).await
    }

    /// Fetch a planet by its raw id.
    ///
    /// Fails with [`CoreError::InvalidId`] for a malformed id and
    /// [`CoreError::NotFound`] when nothing matches.
    pub async fn find_by_id(&self, raw_id: &str) -> Result<Planet, CoreError> {
        let id = parse_planet_id(raw_id)?;
        self.bounded("find_by_id", self.store.find_one(id))
            .await?
            .ok_or_else(|| CoreError::NotFound(NO_DOCUMENTS.to_string()))
    }

    /// Delete a planet by its raw id, returning the number removed.
    ///
    /// A miss is `Ok(0)`, not an error; the caller decides what that means.
    pub async fn delete_by_id(&self, raw_id: &str) -> Result<u64, CoreError> {
        let id = parse_planet_id(raw_id)?;
        self.bounded("delete_by_id", self.store.delete_one(id)).await
    }

    /// Count all matches, then fetch the requested page of them.
    pub async fn find_paged(
        &self,
        filter: &NameFilter,
        page: i64,
        page_size: i64,
    ) -> Result<Paginated<Planet>, CoreError> {
        let window = PageWindow::new(page, page_size);
        let total = self.bounded("count", self.store.count(filter)).await?;
        let result = self.bounded("find", self.store.find(filter, window)).await?;

        Ok(Paginated {
            meta: PaginationMeta::new(window, total),
            result,
        })
    }

    /// Liveness probe against the store, under the same time budget.
    pub async fn ping(&self) -> Result<(), CoreError> {
        self.bounded("ping", self.store.ping()).await
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(operation, error = %e, "Planet store operation failed");
                Err(CoreError::Persistence(e.to_string()))
            }
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout = ?self.timeout,
                    "Planet store operation timed out"
                );
                Err(CoreError::Timeout {
                    operation,
                    after: self.timeout,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use chrono::Utc;
    use planets_core::search::build_filter;
    use planets_core::types::new_planet_id;

    use super::*;
    use crate::store::MemoryPlanetStore;

    fn planet(name: &str) -> Planet {
        Planet {
            id: new_planet_id(),
            name: name.to_string(),
            climate: "murky".to_string(),
            terrain: "swamp".to_string(),
            appearances: 0,
            created_at: Utc::now(),
        }
    }

    fn memory_repo() -> PlanetRepo {
        PlanetRepo::new(Arc::new(MemoryPlanetStore::new()))
    }

    /// Store whose every call hangs for longer than any test timeout.
    struct StalledStore;

    /// Store whose every call fails.
    struct BrokenStore;

    #[async_trait]
    impl PlanetStore for StalledStore {
        async fn insert_one(&self, _: &Planet) -> Result<PlanetId, StoreError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            unreachable!()
        }
        async fn find_one(&self, _: PlanetId) -> Result<Option<Planet>, StoreError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            unreachable!()
        }
        async fn delete_one(&self, _: PlanetId) -> Result<u64, StoreError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            unreachable!()
        }
        async fn count(&self, _: &NameFilter) -> Result<i64, StoreError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            unreachable!()
        }
        async fn find(&self, _: &NameFilter, _: PageWindow) -> Result<Vec<Planet>, StoreError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            unreachable!()
        }
        async fn ping(&self) -> Result<(), StoreError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            unreachable!()
        }
    }

    #[async_trait]
    impl PlanetStore for BrokenStore {
        async fn insert_one(&self, _: &Planet) -> Result<PlanetId, StoreError> {
            Err(StoreError::OutOfRange("boom".into()))
        }
        async fn find_one(&self, _: PlanetId) -> Result<Option<Planet>, StoreError> {
            Err(StoreError::OutOfRange("boom".into()))
        }
        async fn delete_one(&self, _: PlanetId) -> Result<u64, StoreError> {
            Err(StoreError::OutOfRange("boom".into()))
        }
        async fn count(&self, _: &NameFilter) -> Result<i64, StoreError> {
            Err(StoreError::OutOfRange("boom".into()))
        }
        async fn find(&self, _: &NameFilter, _: PageWindow) -> Result<Vec<Planet>, StoreError> {
            Err(StoreError::OutOfRange("boom".into()))
        }
        async fn ping(&self) -> Result<(), StoreError> {
            Err(StoreError::OutOfRange("boom".into()))
        }
    }

    // -- find_by_id ----------------------------------------------------------

    #[tokio::test]
    async fn find_by_id_round_trips() {
        let repo = memory_repo();
        let p = planet("Dagobah");
        let id = repo.insert(&p).await.unwrap();
        assert_eq!(repo.find_by_id(&id.to_string()).await.unwrap(), p);
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let repo = memory_repo();
        let err = repo
            .find_by_id(&new_planet_id().to_string())
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound(msg) if msg == NO_DOCUMENTS);
    }

    #[tokio::test]
    async fn find_by_id_malformed_is_invalid_id() {
        let repo = memory_repo();
        assert_matches!(repo.find_by_id("234567").await, Err(CoreError::InvalidId(_)));
    }

    // -- delete_by_id --------------------------------------------------------

    #[tokio::test]
    async fn delete_miss_returns_zero() {
        let repo = memory_repo();
        let count = repo
            .delete_by_id(&new_planet_id().to_string())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn delete_malformed_is_invalid_id() {
        let repo = memory_repo();
        assert_matches!(repo.delete_by_id("nope").await, Err(CoreError::InvalidId(_)));
    }

    #[tokio::test]
    async fn delete_hit_returns_one() {
        let repo = memory_repo();
        let id = repo.insert(&planet("Endor")).await.unwrap();
        assert_eq!(repo.delete_by_id(&id.to_string()).await.unwrap(), 1);
    }

    // -- find_paged ----------------------------------------------------------

    #[tokio::test]
    async fn find_paged_reports_true_total_on_every_page() {
        let repo = memory_repo();
        for i in 0..35 {
            repo.insert(&planet(&format!("Planet {i}"))).await.unwrap();
        }
        let all = build_filter(None).unwrap();

        let first = repo.find_paged(&all, 1, 30).await.unwrap();
        assert_eq!(first.result.len(), 30);
        assert_eq!(first.meta.total, 35);
        assert_eq!(first.meta.total_page, 2);
        assert_eq!(first.meta.next, 2);

        let second = repo.find_paged(&all, 2, 30).await.unwrap();
        assert_eq!(second.result.len(), 5);
        assert_eq!(second.meta.total, 35);
        assert_eq!(second.meta.prev, 1);
        assert_eq!(second.meta.next, 0);

        let beyond = repo.find_paged(&all, 3, 30).await.unwrap();
        assert!(beyond.result.is_empty());
        assert_eq!(beyond.meta.total, 35);
        assert_eq!(beyond.meta.page, 3);
    }

    // -- failure mapping -----------------------------------------------------

    #[tokio::test]
    async fn store_failure_is_persistence_error() {
        let repo = PlanetRepo::new(Arc::new(BrokenStore));
        assert_matches!(repo.insert(&planet("Kamino")).await, Err(CoreError::Persistence(_)));
        let all = build_filter(None).unwrap();
        assert_matches!(repo.find_paged(&all, 1, 30).await, Err(CoreError::Persistence(_)));
    }

    #[tokio::test]
    async fn slow_store_times_out() {
        let repo = PlanetRepo::with_timeout(Arc::new(StalledStore), Duration::from_millis(20));
        assert_matches!(
            repo.find_by_id(&new_planet_id().to_string()).await,
            Err(CoreError::Timeout { operation: "find_by_id", .. })
        );
    }

    #[tokio::test]
    async fn malformed_id_is_rejected_before_touching_the_store() {
        let repo = PlanetRepo::with_timeout(Arc::new(StalledStore), Duration::from_millis(20));
        assert_matches!(repo.delete_by_id("bad").await, Err(CoreError::InvalidId(_)));
    }
}
