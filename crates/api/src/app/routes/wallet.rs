use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use pocket_ledger::coordinator::EXTERNAL_SOURCE;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/status/:username", get(status))
        .route("/history/:username", get(history))
        .route("/deposit", post(deposit))
        .route("/transfer", post(transfer))
}

pub async fn status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(username): Path<String>,
) -> axum::response::Response {
    match services.coordinator().current_balance(&username) {
        Ok(balance) => (
            StatusCode::OK,
            Json(serde_json::json!({ "username": username, "balance": balance })),
        )
            .into_response(),
        Err(e) => errors::wallet_error_to_response(e),
    }
}

pub async fn history(
    Extension(services): Extension<Arc<AppServices>>,
    Path(username): Path<String>,
) -> axum::response::Response {
    match services.coordinator().history(&username) {
        Ok(items) => {
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::wallet_error_to_response(e),
    }
}

pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DepositRequest>,
) -> axum::response::Response {
    let source = body.source.as_deref().unwrap_or(EXTERNAL_SOURCE);

    match services
        .coordinator()
        .deposit(&body.username, body.amount, source)
    {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => errors::wallet_error_to_response(e),
    }
}

pub async fn transfer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::TransferRequest>,
) -> axum::response::Response {
    match services
        .coordinator()
        .transfer(&body.from_user, &body.to_user, body.amount)
    {
        Ok(out_leg) => (StatusCode::OK, Json(out_leg)).into_response(),
        Err(e) => errors::wallet_error_to_response(e),
    }
}
