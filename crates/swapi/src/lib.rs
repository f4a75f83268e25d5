//! Client for the Star Wars API planet catalog.
//!
//! [`api::SwapiClient`] performs the raw lookup. [`enrichment::AppearanceSource`]
//! is the best-effort view the planet service uses at creation time: it always
//! yields a count and never an error.

pub mod api;
pub mod enrichment;
