//! Shopping item endpoints.
//!
//! Every name-keyed route acts on the first item, in insertion order, whose
//! `name` equals the decoded path segment exactly.

use axum::{
    extract::{rejection::PathRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use shoplist_infra::ItemStore;

use crate::app::{dto, errors, services::SharedItemStore};

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route("/items/:name", get(get_item).patch(patch_item).delete(delete_item))
}

/// Decoded `:name` segment, or a JSON error for segments axum cannot decode
/// (e.g. invalid UTF-8).
fn path_name(path: Result<Path<String>, PathRejection>) -> Result<String, axum::response::Response> {
    path.map(|Path(name)| name)
        .map_err(|e| errors::json_error(e.status(), e.body_text()))
}

pub async fn list_items(Extension(store): Extension<SharedItemStore>) -> axum::response::Response {
    (StatusCode::OK, Json(store.list())).into_response()
}

pub async fn create_item(
    Extension(store): Extension<SharedItemStore>,
    dto::ItemBody(item): dto::ItemBody,
) -> axum::response::Response {
    let added = store.create(item);
    (StatusCode::OK, Json(dto::added_to_json(added))).into_response()
}

pub async fn get_item(
    Extension(store): Extension<SharedItemStore>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let name = match path_name(path) {
        Ok(n) => n,
        Err(res) => return res,
    };

    match store.get(&name) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => {
            tracing::debug!(%name, "lookup missed");
            errors::item_error_to_response(e)
        }
    }
}

pub async fn patch_item(
    Extension(store): Extension<SharedItemStore>,
    path: Result<Path<String>, PathRejection>,
    dto::ItemBody(patch): dto::ItemBody,
) -> axum::response::Response {
    let name = match path_name(path) {
        Ok(n) => n,
        Err(res) => return res,
    };

    match store.patch(&name, patch) {
        Ok(updated) => (StatusCode::OK, Json(dto::updated_to_json(updated))).into_response(),
        Err(e) => {
            tracing::debug!(%name, "patch target missing");
            errors::item_error_to_response(e)
        }
    }
}

pub async fn delete_item(
    Extension(store): Extension<SharedItemStore>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let name = match path_name(path) {
        Ok(n) => n,
        Err(res) => return res,
    };

    match store.delete(&name) {
        Ok(_) => (StatusCode::OK, Json(dto::deleted_json())).into_response(),
        Err(e) => {
            tracing::debug!(%name, "delete target missing");
            errors::item_error_to_response(e)
        }
    }
}
