pub mod health;
pub mod planet;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /                  welcome message
///
/// /planets           search (GET), create (POST)
/// /planets/{id}      get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::welcome::welcome))
        .nest("/planets", planet::router())
}
