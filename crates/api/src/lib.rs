//! Planet API server library.
//!
//! Exposes the building blocks (config, state, error handling, the planet
//! manager, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod manager;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
