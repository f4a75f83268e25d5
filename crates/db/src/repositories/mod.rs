//! Gateways between the service layer and the planet store.

pub mod planet_repo;

pub use planet_repo::PlanetRepo;
