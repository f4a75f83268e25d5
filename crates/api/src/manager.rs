//! Planet resource manager.
//!
//! Composes validation, best-effort enrichment, and the persistence gateway
//! into the create/get/search/delete use cases. Held in
//! [`AppState`](crate::state::AppState) as an `Arc<PlanetManager>`; it keeps no
//! state between requests.

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use planets_core::error::CoreError;
use planets_core::pagination::Paginated;
use planets_core::search::{build_filter, compute_page, PAGE_SIZE};
use planets_core::types::new_planet_id;
use planets_db::models::planet::{CreatePlanet, Planet};
use planets_db::repositories::PlanetRepo;
use planets_swapi::enrichment::AppearanceSource;

/// Response body for a successful delete.
pub const PLANET_DELETED: &str = "Planet was deleted successfully!";

/// Error message when a delete matches nothing. Clients depend on this text.
pub const PLANET_NOT_IN_GALAXY: &str =
    "no planet with this id was found in this so far far away galaxy";

pub struct PlanetManager {
    repo: PlanetRepo,
    appearances: Arc<dyn AppearanceSource>,
}

impl PlanetManager {
    pub fn new(repo: PlanetRepo, appearances: Arc<dyn AppearanceSource>) -> Self {
        Self { repo, appearances }
    }

    /// Create a planet and return it as stored.
    ///
    /// 1. Validate required fields (no external call on failure).
    /// 2. Look up appearances; a failed lookup counts as 0.
    /// 3. Stamp id, appearances and creation time.
    /// 4. Insert, then read the document back by id.
    pub async fn create(&self, input: CreatePlanet) -> Result<Planet, CoreError> {
        input.validate()?;

        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let appearances = self.appearances.appearances(&name).await;

        // Microsecond precision, matching what TIMESTAMPTZ stores.
        let created_at = Utc::now().trunc_subsecs(6);
        let planet = input.into_planet(new_planet_id(), appearances, created_at)?;
        let id = self.repo.insert(&planet).await?;
        tracing::info!(planet_id = %id, name = %planet.name, appearances, "Planet created");

        self.repo.find_by_id(&id.to_string()).await
    }

    pub async fn get(&self, raw_id: &str) -> Result<Planet, CoreError> {
        self.repo.find_by_id(raw_id).await
    }

    /// Search by optional name with 1-indexed pages of [`PAGE_SIZE`].
    pub async fn search(
        &self,
        name: Option<&str>,
        raw_page: Option<&str>,
    ) -> Result<Paginated<Planet>, CoreError> {
        let filter = build_filter(name)?;
        let page = compute_page(raw_page);
        self.repo.find_paged(&filter, page, PAGE_SIZE).await
    }

    /// Hard-delete a planet. A miss is reported as [`CoreError::NotFound`].
    pub async fn delete(&self, raw_id: &str) -> Result<&'static str, CoreError> {
        match self.repo.delete_by_id(raw_id).await? {
            0 => Err(CoreError::NotFound(PLANET_NOT_IN_GALAXY.to_string())),
            _ => {
                tracing::info!(planet_id = raw_id, "Planet deleted");
                Ok(PLANET_DELETED)
            }
        }
    }

    /// Whether the backing store answers.
    pub async fn ping(&self) -> Result<(), CoreError> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use planets_db::store::MemoryPlanetStore;
    use planets_swapi::enrichment::FixedAppearances;

    use super::*;

    /// Counts lookups and returns a fixed value.
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AppearanceSource for CountingSource {
        async fn appearances(&self, _name: &str) -> u32 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            3
        }
    }

    fn manager_with(source: Arc<dyn AppearanceSource>) -> PlanetManager {
        let repo = PlanetRepo::new(Arc::new(MemoryPlanetStore::new()));
        PlanetManager::new(repo, source)
    }

    fn manager() -> PlanetManager {
        manager_with(Arc::new(FixedAppearances(0)))
    }

    fn input(name: &str, climate: &str, terrain: &str) -> CreatePlanet {
        CreatePlanet {
            name: Some(name.into()),
            climate: Some(climate.into()),
            terrain: Some(terrain.into()),
        }
    }

    // -- create --------------------------------------------------------------

    #[tokio::test]
    async fn create_stamps_system_fields() {
        let started = Utc::now().trunc_subsecs(6);
        let manager = manager_with(Arc::new(FixedAppearances(5)));

        let planet = manager
            .create(input("Tatooine", "arid", "desert"))
            .await
            .unwrap();

        assert!(!planet.id.is_nil());
        assert_eq!(planet.appearances, 5);
        assert!(planet.created_at >= started);
        assert_eq!(planet.name, "Tatooine");
    }

    #[tokio::test]
    async fn create_stamps_microsecond_precision() {
        let planet = manager()
            .create(input("Tatooine", "arid", "desert"))
            .await
            .unwrap();

        assert_eq!(planet.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let manager = manager();
        let created = manager.create(input("Hoth", "frozen", "tundra")).await.unwrap();
        let fetched = manager.get(&created.id.to_string()).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn invalid_create_skips_enrichment() {
        let source = Arc::new(CountingSource::default());
        let manager = manager_with(source.clone());

        let result = manager
            .create(CreatePlanet {
                terrain: None,
                ..input("Tatooine", "arid", "desert")
            })
            .await;

        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg == "terrain: Missing required field"
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_create_calls_enrichment_once() {
        let source = Arc::new(CountingSource::default());
        let manager = manager_with(source.clone());
        let planet = manager.create(input("Naboo", "temperate", "swamp")).await.unwrap();
        assert_eq!(planet.appearances, 3);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    // -- delete --------------------------------------------------------------

    #[tokio::test]
    async fn delete_twice_reports_not_found_second_time() {
        let manager = manager();
        let planet = manager
            .create(input("Alderaan", "temperate", "grasslands"))
            .await
            .unwrap();
        let id = planet.id.to_string();

        assert_eq!(manager.delete(&id).await.unwrap(), PLANET_DELETED);
        assert_matches!(
            manager.delete(&id).await,
            Err(CoreError::NotFound(msg)) if msg == PLANET_NOT_IN_GALAXY
        );
    }

    #[tokio::test]
    async fn delete_malformed_id_is_invalid() {
        assert_matches!(manager().delete("xyz").await, Err(CoreError::InvalidId(_)));
    }

    // -- search --------------------------------------------------------------

    #[tokio::test]
    async fn search_without_name_returns_everything() {
        let manager = manager();
        manager.create(input("Tatooine", "arid", "desert")).await.unwrap();
        manager.create(input("Tund", "unknown", "barren, ash")).await.unwrap();

        let page = manager.search(None, None).await.unwrap();
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.meta.total_page, 1);
        assert_eq!(page.meta.per_page, PAGE_SIZE);
        assert_eq!(page.result.len(), 2);
    }

    #[tokio::test]
    async fn search_by_name_filters() {
        let manager = manager();
        manager.create(input("Tatooine", "arid", "desert")).await.unwrap();
        manager.create(input("Tholoth", "unknown", "unknown")).await.unwrap();

        let page = manager.search(Some("tholoth"), None).await.unwrap();
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.result[0].name, "Tholoth");
    }

    #[tokio::test]
    async fn search_page_past_the_end_is_empty() {
        let manager = manager();
        manager.create(input("Tatooine", "arid", "desert")).await.unwrap();

        let page = manager.search(None, Some("2")).await.unwrap();
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.total, 1);
        assert!(page.result.is_empty());
    }

    #[tokio::test]
    async fn search_with_garbage_page_uses_first_page() {
        let manager = manager();
        manager.create(input("Tatooine", "arid", "desert")).await.unwrap();

        let page = manager.search(None, Some("abc")).await.unwrap();
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.result.len(), 1);
    }
}
