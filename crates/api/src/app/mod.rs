//! HTTP API application wiring (Axum router + store injection).
//!
//! - `services.rs`: store construction and the shared handle type
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request body extraction and response shapes
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Callers keep their own clone of `store` to inspect or reset the
/// collection directly.
pub fn build_app(store: services::SharedItemStore) -> Router {
    routes::router()
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log))
                .layer(Extension(store)),
        )
}
