//! PostgreSQL-backed [`PlanetStore`] over the `planets` table.

use async_trait::async_trait;
use planets_core::pagination::PageWindow;
use planets_core::search::NameFilter;
use planets_core::types::PlanetId;

use super::{PlanetStore, StoreError};
use crate::models::planet::Planet;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, climate, terrain, appearances, created_at";

/// `$1` is the escaped name pattern, or NULL to match every row.
const NAME_PREDICATE: &str = "($1::text IS NULL OR name ~* $1)";

#[derive(Debug, Clone)]
pub struct PgPlanetStore {
    pool: DbPool,
}

impl PgPlanetStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetStore for PgPlanetStore {
    async fn insert_one(&self, planet: &Planet) -> Result<PlanetId, StoreError> {
        let appearances = i32::try_from(planet.appearances)
            .map_err(|_| StoreError::OutOfRange(format!("appearances={}", planet.appearances)))?;

        let id = sqlx::query_scalar::<_, PlanetId>(
            "INSERT INTO planets (id, name, climate, terrain, appearances, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(planet.id)
        .bind(&planet.name)
        .bind(&planet.climate)
        .bind(&planet.terrain)
        .bind(appearances)
        .bind(planet.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return StoreError::DuplicateId(planet.id);
                }
            }
            StoreError::Database(e)
        })?;
        Ok(id)
    }

    async fn find_one(&self, id: PlanetId) -> Result<Option<Planet>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        let planet = sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(planet)
    }

    async fn delete_one(&self, id: PlanetId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn count(&self, filter: &NameFilter) -> Result<i64, StoreError> {
        let query = format!("SELECT COUNT(*) FROM planets WHERE {NAME_PREDICATE}");
        let total = sqlx::query_scalar::<_, i64>(&query)
            .bind(filter.pattern())
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn find(
        &self,
        filter: &NameFilter,
        window: PageWindow,
    ) -> Result<Vec<Planet>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM planets
             WHERE {NAME_PREDICATE}
             ORDER BY created_at ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        let planets = sqlx::query_as::<_, Planet>(&query)
            .bind(filter.pattern())
            .bind(window.limit())
            .bind(window.offset())
            .fetch_all(&self.pool)
            .await?;
        Ok(planets)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
