//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store construction and the service bundle handlers use
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// CORS is wide open; this serves a local development frontend.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router()
        .layer(axum::Extension(services))
        .layer(CorsLayer::permissive())
}
