//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register       -> register
/// POST /token          -> token
/// POST /token/refresh  -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/token", post(auth::token))
        .route("/token/refresh", post(auth::refresh))
}
