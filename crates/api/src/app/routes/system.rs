use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Fallback for unmatched paths, keeping every response JSON.
pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "Not found")
}
