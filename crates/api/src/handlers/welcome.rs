use axum::Json;
use serde::Serialize;

/// Greeting returned by `GET /api`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Star Wars Planet App API 😉";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /api
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
