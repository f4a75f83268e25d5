use crate::error::CoreError;

/// Planet identifiers are UUIDs (v7, so they sort by creation time).
pub type PlanetId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier for a planet about to be inserted.
pub fn new_planet_id() -> PlanetId {
    uuid::Uuid::now_v7()
}

/// Parse a raw path segment into a [`PlanetId`].
///
/// Returns [`CoreError::InvalidId`] when the input is not a well-formed UUID.
pub fn parse_planet_id(raw: &str) -> Result<PlanetId, CoreError> {
    uuid::Uuid::parse_str(raw.trim())
        .map_err(|e| CoreError::InvalidId(format!("'{raw}' is not a valid planet id: {e}")))
}
