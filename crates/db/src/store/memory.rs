//! In-process [`PlanetStore`], used by tests and local runs without Postgres.

use async_trait::async_trait;
use planets_core::pagination::PageWindow;
use planets_core::search::NameFilter;
use planets_core::types::PlanetId;
use tokio::sync::RwLock;

use super::{PlanetStore, StoreError};
use crate::models::planet::Planet;

/// Documents kept sorted by `(created_at, id)`.
#[derive(Debug, Default)]
pub struct MemoryPlanetStore {
    planets: RwLock<Vec<Planet>>,
}

impl MemoryPlanetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.planets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.planets.read().await.is_empty()
    }
}

#[async_trait]
impl PlanetStore for MemoryPlanetStore {
    async fn insert_one(&self, planet: &Planet) -> Result<PlanetId, StoreError> {
        let mut planets = self.planets.write().await;
        if planets.iter().any(|p| p.id == planet.id) {
            return Err(StoreError::DuplicateId(planet.id));
        }
        let key = (planet.created_at, planet.id);
        let at = planets.partition_point(|p| (p.created_at, p.id) < key);
        planets.insert(at, planet.clone());
        Ok(planet.id)
    }

    async fn find_one(&self, id: PlanetId) -> Result<Option<Planet>, StoreError> {
        let planets = self.planets.read().await;
        Ok(planets.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_one(&self, id: PlanetId) -> Result<u64, StoreError> {
        let mut planets = self.planets.write().await;
        let before = planets.len();
        planets.retain(|p| p.id != id);
        Ok((before - planets.len()) as u64)
    }

    async fn count(&self, filter: &NameFilter) -> Result<i64, StoreError> {
        let planets = self.planets.read().await;
        Ok(planets.iter().filter(|p| filter.matches(&p.name)).count() as i64)
    }

    async fn find(
        &self,
        filter: &NameFilter,
        window: PageWindow,
    ) -> Result<Vec<Planet>, StoreError> {
        let skip = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(window.limit()).unwrap_or(usize::MAX);
        let planets = self.planets.read().await;
        Ok(planets
            .iter()
            .filter(|p| filter.matches(&p.name))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
