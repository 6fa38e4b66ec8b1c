use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/login", post(login))
}

/// Validate credentials and return the user's summary with their current
/// (replayed) balance. Unknown users and bad passwords both come back 401.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let user = match services.auth().authenticate(&body.username, &body.password) {
        Ok(Some(user)) => user,
        Ok(None) => {
            return errors::json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "invalid username or password",
            );
        }
        Err(e) => return errors::wallet_error_to_response(e),
    };

    let balance = match services.coordinator().current_balance(user.username()) {
        Ok(balance) => balance,
        Err(e) => return errors::wallet_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "username": user.username(),
            "email": user.email(),
            "balance": balance,
        })),
    )
        .into_response()
}
