use std::sync::Arc;

use crate::manager::PlanetManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Planet use cases (create, get, search, delete).
    pub planets: Arc<PlanetManager>,
}
