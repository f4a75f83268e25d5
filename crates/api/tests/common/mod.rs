#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use planets_api::config::ServerConfig;
use planets_api::manager::PlanetManager;
use planets_api::router::build_app_router;
use planets_api::state::AppState;
use planets_db::repositories::PlanetRepo;
use planets_db::store::MemoryPlanetStore;
use planets_swapi::enrichment::FixedAppearances;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_timeout_secs: 8,
        swapi_base_url: "http://127.0.0.1:1".to_string(),
        swapi_timeout_secs: 1,
    }
}

/// Build the full application router over an empty in-memory store.
///
/// Every created planet gets `appearances` from a fixed source, so tests never
/// reach the real catalog. The router is `Clone`; clones share the store.
pub fn build_test_app(appearances: u32) -> Router {
    let config = test_config();
    let repo = PlanetRepo::new(Arc::new(MemoryPlanetStore::new()));
    let state = AppState {
        planets: Arc::new(PlanetManager::new(
            repo,
            Arc::new(FixedAppearances(appearances)),
        )),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a planet through the API and return its JSON representation.
pub async fn create_planet(
    app: &Router,
    name: &str,
    climate: &str,
    terrain: &str,
) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/planets",
        serde_json::json!({"name": name, "climate": climate, "terrain": terrain}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
