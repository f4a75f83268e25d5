//! Best-effort appearance enrichment.

use async_trait::async_trait;

use crate::api::SwapiClient;

/// Source of a planet's film-appearance count.
///
/// The result is a plain count: `0` means "unknown", whether the catalog had
/// no single match or the lookup failed. Implementations never surface errors.
#[async_trait]
pub trait AppearanceSource: Send + Sync {
    async fn appearances(&self, name: &str) -> u32;
}

#[async_trait]
impl AppearanceSource for SwapiClient {
    async fn appearances(&self, name: &str) -> u32 {
        match self.lookup_appearances(name).await {
            Ok(count) => {
                tracing::debug!(planet = name, count, "SWAPI appearance lookup");
                count
            }
            Err(e) => {
                tracing::warn!(
                    planet = name,
                    error = %e,
                    "SWAPI lookup failed, defaulting to 0 appearances"
                );
                0
            }
        }
    }
}

/// Returns the same count for every name. Used when no catalog is reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearances(pub u32);

#[async_trait]
impl AppearanceSource for FixedAppearances {
    async fn appearances(&self, _name: &str) -> u32 {
        self.0
    }
}
