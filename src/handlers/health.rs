// src/handlers/health.rs

use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Liveness probe; also what the frontend pings on load.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Wiki Quiz Generator API running" }))
}
