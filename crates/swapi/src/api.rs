//! REST API client for the SWAPI `/planets/` search endpoint.

use std::time::Duration;

use serde::Deserialize;

/// Public SWAPI root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// HTTP client for a SWAPI-compatible catalog.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Body returned by `GET /planets/?search=<name>`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetSearchResponse {
    /// Total number of catalog planets matching the search.
    pub count: i64,
    #[serde(default)]
    pub results: Vec<CatalogPlanet>,
}

/// One catalog entry. Only the fields the lookup needs are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPlanet {
    pub name: String,
    /// Film resource URLs the planet appears in.
    #[serde(default)]
    pub films: Vec<String>,
}

/// Errors from the SWAPI REST layer.
#[derive(Debug, thiserror::Error)]
pub enum SwapiError {
    /// The HTTP request failed (network, DNS, TLS, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("SWAPI error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl SwapiClient {
    /// Create a client with its own connection pool and request timeout.
    ///
    /// * `base_url` - API root, e.g. `https://swapi.dev/api`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SwapiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the catalog by planet name.
    ///
    /// The name travels as the query-encoded `search` parameter, so spaces and
    /// reserved characters are escaped.
    pub async fn search_planets(&self, name: &str) -> Result<PlanetSearchResponse, SwapiError> {
        let response = self
            .client
            .get(format!("{}/planets/", self.base_url))
            .query(&[("search", name)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Number of films the planet called `name` appears in.
    ///
    /// One request, no retries. Ambiguous or unknown names give `Ok(0)`; see
    /// [`appearances_from`].
    pub async fn lookup_appearances(&self, name: &str) -> Result<u32, SwapiError> {
        let response = self.search_planets(name).await?;
        Ok(appearances_from(name, &response))
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SwapiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SwapiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SwapiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Decide the appearance count for `query` from a catalog search result.
///
/// - zero or several matches: 0
/// - a single match whose name differs from `query` (ignoring case): 0
/// - otherwise the number of films listed for the match
pub fn appearances_from(query: &str, response: &PlanetSearchResponse) -> u32 {
    if response.count != 1 {
        return 0;
    }
    let Some(found) = response.results.first() else {
        return 0;
    };
    if found.name.to_lowercase() != query.to_lowercase() {
        return 0;
    }
    u32::try_from(found.films.len()).unwrap_or(u32::MAX)
}
