//! Route definitions for the `/planets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Routes mounted at `/planets`.
///
/// ```text
/// GET    /        -> search (?name=&page=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planet::search).post(planet::create))
        .route("/{id}", get(planet::get_by_id).delete(planet::delete))
}
