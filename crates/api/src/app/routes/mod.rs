use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(items::router())
}
