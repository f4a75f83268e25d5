//! Document-store seam for planets.
//!
//! A store offers the primitive operations the gateway composes: insert one,
//! find one by id, delete one by id, count by filter, and a windowed find.
//! Results from [`PlanetStore::find`] are ordered by `(created_at, id)`
//! ascending so page windows stay stable while the collection changes.

use async_trait::async_trait;
use planets_core::pagination::PageWindow;
use planets_core::search::NameFilter;
use planets_core::types::PlanetId;

use crate::models::planet::Planet;

mod memory;
mod postgres;

pub use memory::MemoryPlanetStore;
pub use postgres::PgPlanetStore;

/// Errors raised by a [`PlanetStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database driver reported a failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A document with this id already exists.
    #[error("a planet with id {0} already exists")]
    DuplicateId(PlanetId),

    /// A value does not fit the store's column type.
    #[error("value out of range: {0}")]
    OutOfRange(String),
}

#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// Insert a document, returning its id.
    async fn insert_one(&self, planet: &Planet) -> Result<PlanetId, StoreError>;

    async fn find_one(&self, id: PlanetId) -> Result<Option<Planet>, StoreError>;

    /// Delete by id, returning how many documents were removed (0 or 1).
    async fn delete_one(&self, id: PlanetId) -> Result<u64, StoreError>;

    /// Count every document matching `filter`, ignoring any page window.
    async fn count(&self, filter: &NameFilter) -> Result<i64, StoreError>;

    /// Fetch the documents matching `filter` that fall inside `window`.
    async fn find(
        &self,
        filter: &NameFilter,
        window: PageWindow,
    ) -> Result<Vec<Planet>, StoreError>;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
