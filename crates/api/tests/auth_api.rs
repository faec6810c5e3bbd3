//! HTTP-level integration tests for registration and token endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn register(pool: &PgPool, username: &str, password: &str) -> StatusCode {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/auth/register",
        json!({ "username": username, "password": password }),
    )
    .await
    .status()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_then_obtain_tokens(pool: PgPool) {
    assert_eq!(register(&pool, "alice", "long-enough").await, StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/token",
        json!({ "username": "alice", "password": "long-enough" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access"].is_string());
    assert!(json["refresh"].is_string());
    assert_eq!(json["expires_in"], 15 * 60);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_response_has_no_password_hash(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({ "username": "bob", "password": "long-enough" }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["username"], "bob");
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_validation_and_duplicates(pool: PgPool) {
    assert_eq!(register(&pool, "carol", "short").await, StatusCode::BAD_REQUEST);
    assert_eq!(register(&pool, "  ", "long-enough").await, StatusCode::BAD_REQUEST);
    assert_eq!(register(&pool, "carol", "long-enough").await, StatusCode::CREATED);
    assert_eq!(register(&pool, "carol", "long-enough").await, StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrong_password_and_unknown_user_look_alike(pool: PgPool) {
    register(&pool, "dave", "long-enough").await;

    let app = common::build_test_app(pool.clone());
    let wrong = post_json(
        app,
        "/api/v1/auth/token",
        json!({ "username": "dave", "password": "not-it" }),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong_body = body_json(wrong).await;

    let app = common::build_test_app(pool);
    let unknown = post_json(
        app,
        "/api/v1/auth/token",
        json!({ "username": "nobody", "password": "not-it" }),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(unknown).await, wrong_body);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_issues_access_token(pool: PgPool) {
    register(&pool, "erin", "long-enough").await;

    let app = common::build_test_app(pool.clone());
    let tokens = body_json(
        post_json(
            app,
            "/api/v1/auth/token",
            json!({ "username": "erin", "password": "long-enough" }),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/token/refresh",
        json!({ "refresh": tokens["refresh"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["access"].is_string());

    // An access token is not accepted as a refresh token.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/token/refresh",
        json!({ "refresh": tokens["access"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
