#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cluckfit_api::config::ServerConfig;
use cluckfit_api::router::build_app_router;
use cluckfit_api::state::AppState;
use cluckfit_core::quest::QuestCatalog;
use cluckfit_db::repositories::QuestTemplateRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the construction in `main.rs` (including the quest catalog
/// loaded from the seeded templates) so integration tests exercise the
/// same stack that production uses.
pub async fn build_test_app(pool: PgPool) -> Router {
    let templates = QuestTemplateRepo::list_all(&pool)
        .await
        .expect("quest templates must be seeded by migrations");
    let defs = templates
        .into_iter()
        .map(|t| t.into_def())
        .collect::<Result<Vec<_>, _>>()
        .expect("seeded quest templates must be valid");
    let quests = QuestCatalog::new(defs).expect("seeded quest catalog must be complete");

    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        quests: Arc::new(quests),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

/// Send a POST request with an optional JSON body.
pub async fn post_json(app: &Router, uri: &str, body: Option<serde_json::Value>) -> Response {
    send(app, Method::POST, uri, body).await
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Create a user (and thus a pet) through the API, returning the profile.
pub async fn create_user(app: &Router, user_id: &str, pet_name: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/users/",
        Some(serde_json::json!({ "user_id": user_id, "pet_name": pet_name })),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}

/// Log an exercise session through the API, returning the response JSON.
pub async fn log_exercise(
    app: &Router,
    user_id: &str,
    duration_seconds: i64,
    steps: i64,
) -> serde_json::Value {
    let response = post_json(
        app,
        &format!("/users/{user_id}/exercise"),
        Some(serde_json::json!({
            "exercise_type": "Running",
            "duration_seconds": duration_seconds,
            "steps": steps,
        })),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}
