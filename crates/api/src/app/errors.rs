use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shoplist_core::ItemError;

pub fn item_error_to_response(err: ItemError) -> axum::response::Response {
    match err {
        ItemError::NotFound => json_error(StatusCode::NOT_FOUND, err.to_string()),
    }
}

/// `{ "error": message }` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
