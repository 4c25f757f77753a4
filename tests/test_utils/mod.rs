//! Shared helpers for the HTTP integration tests
#![allow(dead_code)]
use axum::{ body::{ to_bytes, Body }, http::{ Request, Response }, Router };
use chronex_ai::agent::ChatAgent;
use chronex_ai::server::api::{ app, AppState };
use serde_json::Value;
use tower::util::ServiceExt;

/// Router backed by a default agent. Stateless, so tests can run in parallel.
pub fn test_app() -> Router {
    app(AppState::new(ChatAgent::default()))
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

pub async fn post_json(app: Router, uri: &str, payload: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    ).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap()
}
