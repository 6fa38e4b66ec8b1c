use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pocket_core::WalletError;

/// Map a domain error to its HTTP response; each error kind keeps a
/// distinct status + code so clients can tell them apart.
pub fn wallet_error_to_response(err: WalletError) -> axum::response::Response {
    match err {
        WalletError::InvalidAmount(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_amount", msg)
        }
        WalletError::UserNotFound(username) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("user not found: {username}"),
        ),
        WalletError::InsufficientFunds(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "insufficient_funds", msg)
        }
        WalletError::Persistence(msg) => {
            tracing::error!(error = %msg, "store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "persistence_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
