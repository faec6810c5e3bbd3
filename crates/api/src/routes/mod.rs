pub mod auth;
pub mod health;
pub mod record;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                     register (public)
/// /auth/token                        obtain token pair (public)
/// /auth/token/refresh                refresh access token (public)
///
/// /sites                             list, create
/// /sites/{id}                        get, update, delete
/// /sites/{id}/records                list, create
///
/// /records                           list, create
/// /records/{id}                      get, put, patch, delete
/// ```
///
/// Everything outside `/auth` requires a Bearer access token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/sites", site::router())
        .nest("/records", record::router())
}
