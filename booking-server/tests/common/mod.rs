#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use booking_server::auth::{JwtConfig, JwtService};
use booking_server::db::Store;
use booking_server::{Config, ServerState, build_app};
use http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_minutes: 60,
        issuer: "booking-server".to_string(),
        audience: "booking-clients".to_string(),
    }
}

pub fn test_state() -> ServerState {
    ServerState::new(Config::for_tests(jwt_config()), Store::memory())
}

pub fn test_app() -> (Router, ServerState) {
    let state = test_state();
    (build_app(state.clone()), state)
}

/// Token signed with the test secret for an arbitrary subject
pub fn token_for(id: &str, name: &str, email: &str) -> String {
    JwtService::with_config(jwt_config())
        .generate_token(id, name, email)
        .expect("token")
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let resp = send_raw(app, method, uri, token, body).await;
    let status = resp.status();
    (status, body_json(resp).await)
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    app.clone().oneshot(req).await.expect("response")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    }
}

/// Sign up a member and return (id, token)
pub async fn sign_up(app: &Router, name: &str, email: &str, password: &str) -> (String, String) {
    let (status, body) = send(
        app,
        "POST",
        "/signup",
        None,
        Some(serde_json::json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signup failed: {body}");

    let token = body["token"].as_str().expect("token").to_string();
    let claims = JwtService::with_config(jwt_config())
        .validate_token(&token)
        .expect("valid token");
    (claims.sub, token)
}
