use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Answers ok regardless of provider or config state.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
