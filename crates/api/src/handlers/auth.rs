//! Handlers for the `/auth` resource (register, token, refresh).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use vaultlist_core::error::CoreError;
use vaultlist_core::field_errors::{FieldErrors, MSG_BLANK};
use vaultlist_db::models::user::{CreateUser, UserResponse};
use vaultlist_db::repositories::UserRepo;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, validate_token, TokenType};
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Returned for every credential failure so callers cannot probe usernames.
const BAD_CREDENTIALS: &str = "No active account found with the given credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register` and `POST /auth/token`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/token/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Response for `POST /auth/token`.
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Response for `POST /auth/token/refresh`.
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let username = input.username.trim();

    let mut errors = FieldErrors::new();
    if username.is_empty() {
        errors.add("username", MSG_BLANK);
    }
    if let Err(msg) = validate_password_strength(&input.password, MIN_PASSWORD_LENGTH) {
        errors.add("password", msg);
    }
    errors.into_result(())?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/v1/auth/token
///
/// Exchange username + password for an access/refresh token pair.
pub async fn token(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<TokenPairResponse>> {
    let user = UserRepo::find_by_username(&state.pool, input.username.trim())
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into())));
    }

    let jwt = &state.config.jwt;
    let access = generate_access_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let refresh = generate_refresh_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "Issued token pair");
    Ok(Json(TokenPairResponse {
        access,
        refresh,
        expires_in: jwt.access_token_expiry_secs(),
    }))
}

/// POST /api/v1/auth/token/refresh
///
/// Exchange a valid refresh token for a new access token.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    let jwt = &state.config.jwt;
    let claims = validate_token(&input.refresh, TokenType::Refresh, jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        ))
    })?;

    // The account may have been removed or disabled since the token was issued.
    UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into())))?;

    let access = generate_access_token(claims.sub, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(AccessTokenResponse {
        access,
        expires_in: jwt.access_token_expiry_secs(),
    }))
}
