//! Shared helpers for API integration tests.
//!
//! Requests go straight to the router via `tower::ServiceExt::oneshot`,
//! without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use vaultlist_api::auth::jwt::{generate_access_token, JwtConfig};
use vaultlist_api::config::ServerConfig;
use vaultlist_api::router::build_app_router;
use vaultlist_api::state::AppState;
use vaultlist_core::record_input::SerializerConfig;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        serializer: SerializerConfig::default(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router around `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the full application router with a custom configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
    })
}

/// A valid access token for an arbitrary user id.
///
/// Record and site routes only check the token, not the user row.
pub fn test_token() -> String {
    generate_access_token(1, &test_config().jwt).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// Unauthenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn get_auth(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(&test_token()), None).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(&test_token()), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(&test_token()), Some(body)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(&test_token()), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(&test_token()), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a site and return its id.
pub async fn create_site(pool: &PgPool, name: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/sites",
        serde_json::json!({ "website_name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
