// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use fitness_tracker::config::Config;
use fitness_tracker::db::FileStore;
use fitness_tracker::routes::create_router;
use fitness_tracker::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app over an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config, FileStore::in_memory()));
    (create_router(state.clone()), state)
}

/// Send one request through a clone of the router.
#[allow(dead_code)]
pub async fn send(app: &axum::Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub fn signup_body(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "gender": "female",
        "height": 165,
        "weight": 70
    })
}

/// Register a user, which also starts a session.
#[allow(dead_code)]
pub async fn sign_up(app: &axum::Router, username: &str, email: &str) {
    let response = send(
        app,
        json_request("POST", "/auth/signup", signup_body(username, email)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Spawn a stand-in for a remote API on an ephemeral local port.
/// Returns its base URL.
#[allow(dead_code)]
pub async fn spawn_stub(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
