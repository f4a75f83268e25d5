//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/planets` (`?name=&page=`).
///
/// `page` stays a raw string so that non-numeric input falls back to the
/// first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PlanetSearchParams {
    pub name: Option<String>,
    pub page: Option<String>,
}
