//! Router-level tests: requests in, status codes + JSON out.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use pocket_api::app::{self, services::AppServices};
use pocket_api::config::ApiConfig;
use pocket_auth::User;
use pocket_core::UserRecord;
use pocket_store::JsonUserDirectory;

fn test_app(dir: &tempfile::TempDir) -> Router {
    let users_file = dir.path().join("users.json");
    let hash = User::hash_password("user1_pass").unwrap();
    JsonUserDirectory::seed(
        &users_file,
        &[
            UserRecord {
                username: "user1".to_string(),
                email: "user1@example.com".to_string(),
                password: hash.clone(),
                balance: 1000.0,
            },
            UserRecord {
                username: "user2".to_string(),
                email: "user2@example.com".to_string(),
                password: hash,
                balance: 500.0,
            },
        ],
    )
    .unwrap();

    let config = ApiConfig {
        users_file,
        transactions_file: dir.path().join("transactions.csv"),
        bind: String::new(),
    };
    app::build_app(Arc::new(AppServices::from_config(&config)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_endpoint_responds() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn status_returns_replayed_balance() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = get(&app, "/wallet/status/user1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "user1");
    assert_eq!(body["balance"], 1000.0);

    let (status, body) = get(&app, "/wallet/status/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn deposit_returns_the_persisted_record() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/wallet/deposit",
        json!({"username": "user1", "amount": 250.0, "source": "bank"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "deposit");
    assert_eq!(body["owner"], "user1");
    assert_eq!(body["from_user"], "bank");
    assert_eq!(body["balance"], 1250.0);

    let (status, body) = get(&app, "/wallet/status/user1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], 1250.0);
}

#[tokio::test]
async fn deposit_with_bad_amount_is_a_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/wallet/deposit",
        json!({"username": "user1", "amount": -1.0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_amount");
}

#[tokio::test]
async fn transfer_moves_funds_between_users() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/wallet/transfer",
        json!({"from_user": "user1", "to_user": "user2", "amount": 200.0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "transfer_out");
    assert_eq!(body["balance"], 800.0);

    let (_, sender) = get(&app, "/wallet/status/user1").await;
    let (_, receiver) = get(&app, "/wallet/status/user2").await;
    assert_eq!(sender["balance"], 800.0);
    assert_eq!(receiver["balance"], 700.0);

    let (status, body) = get(&app, "/wallet/history/user2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["type"], "transfer_in");
}

#[tokio::test]
async fn transfer_failures_map_to_distinct_statuses() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/wallet/transfer",
        json!({"from_user": "user1", "to_user": "user2", "amount": 99999.0}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "insufficient_funds");

    let (status, _) = post(
        &app,
        "/wallet/transfer",
        json!({"from_user": "user1", "to_user": "ghost", "amount": 1.0}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_checks_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = post(
        &app,
        "/auth/login",
        json!({"username": "user1", "password": "user1_pass"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "user1");
    assert_eq!(body["balance"], 1000.0);

    let (status, body) = post(
        &app,
        "/auth/login",
        json!({"username": "user1", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_credentials");
}
