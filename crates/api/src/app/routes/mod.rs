use axum::routing::get;
use axum::Router;

pub mod auth;
pub mod system;
pub mod wallet;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest("/auth", auth::router())
        .nest("/wallet", wallet::router())
}
