//! Planet entity model and DTOs.

use planets_core::error::CoreError;
use planets_core::types::{PlanetId, Timestamp};
use planets_core::validation::{validate_required, FieldRequirement, FieldSource};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fields a client must supply when creating a planet, in reporting order.
pub const PLANET_REQUIRED_FIELDS: &[FieldRequirement] = &[
    FieldRequirement::required("name"),
    FieldRequirement::required("climate"),
    FieldRequirement::required("terrain"),
];

/// A planet row from the `planets` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Planet {
    #[serde(rename = "_id")]
    pub id: PlanetId,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    /// Film appearances from the catalog lookup. Set once at creation.
    #[sqlx(try_from = "i32")]
    pub appearances: u32,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// DTO for creating a new planet.
///
/// Every field is optional at the wire level so that a missing field reaches
/// [`CreatePlanet::validate`] and gets a field-specific message. System-assigned
/// fields in the request body are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanet {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl FieldSource for CreatePlanet {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => self.name.as_deref(),
            "climate" => self.climate.as_deref(),
            "terrain" => self.terrain.as_deref(),
            _ => None,
        }
    }
}

impl CreatePlanet {
    /// Check the fields in [`PLANET_REQUIRED_FIELDS`].
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(self, PLANET_REQUIRED_FIELDS)
    }

    /// Validate and stamp the system-assigned fields, producing a full entity.
    pub fn into_planet(
        self,
        id: PlanetId,
        appearances: u32,
        created_at: Timestamp,
    ) -> Result<Planet, CoreError> {
        self.validate()?;
        let take = |v: Option<String>| v.map(|s| s.trim().to_string()).unwrap_or_default();
        Ok(Planet {
            id,
            name: take(self.name),
            climate: take(self.climate),
            terrain: take(self.terrain),
            appearances,
            created_at,
        })
    }
}
