//! Handlers for the `/planets` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use planets_core::pagination::Paginated;
use planets_db::models::planet::{CreatePlanet, Planet};

use crate::error::{AppError, AppResult};
use crate::query::PlanetSearchParams;
use crate::state::AppState;

/// POST /api/planets
///
/// A body that is not valid JSON for [`CreatePlanet`] is a 400, same as a
/// missing required field.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanet>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let planet = state.planets.create(input).await?;
    Ok((StatusCode::CREATED, Json(planet)))
}

/// GET /api/planets?name=&page=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<PlanetSearchParams>,
) -> AppResult<Json<Paginated<Planet>>> {
    let page = state
        .planets
        .search(params.name.as_deref(), params.page.as_deref())
        .await?;
    Ok(Json(page))
}

/// GET /api/planets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Planet>> {
    let planet = state.planets.get(&id).await?;
    Ok(Json(planet))
}

/// DELETE /api/planets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<&'static str>> {
    let message = state.planets.delete(&id).await?;
    Ok(Json(message))
}
