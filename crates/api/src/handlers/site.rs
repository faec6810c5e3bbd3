//! Handlers for the `/sites` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vaultlist_core::error::CoreError;
use vaultlist_core::record::validate_website_name;
use vaultlist_core::types::DbId;
use vaultlist_db::models::site::{CreateSite, SiteRow, UpdateSite};
use vaultlist_db::repositories::SiteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/sites
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateSite>,
) -> AppResult<(StatusCode, Json<SiteRow>)> {
    let input = CreateSite {
        website_name: validate_website_name(&input.website_name)?,
    };
    let site = SiteRepo::create(&state.pool, &input).await?;
    tracing::info!(site_id = site.id, user_id = user.user_id, "Site created");
    Ok((StatusCode::CREATED, Json(site)))
}

/// GET /api/v1/sites
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<SiteRow>>> {
    let sites = SiteRepo::list(&state.pool).await?;
    Ok(Json(sites))
}

/// GET /api/v1/sites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<SiteRow>> {
    let site = SiteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Site", id }))?;
    Ok(Json(site))
}

/// PUT /api/v1/sites/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSite>,
) -> AppResult<Json<SiteRow>> {
    let input = UpdateSite {
        website_name: input
            .website_name
            .as_deref()
            .map(validate_website_name)
            .transpose()?,
    };
    let site = SiteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Site", id }))?;
    tracing::info!(site_id = id, user_id = user.user_id, "Site updated");
    Ok(Json(site))
}

/// DELETE /api/v1/sites/{id}
///
/// Records linked to the site survive with no site.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SiteRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(site_id = id, user_id = user.user_id, "Site deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Site", id }))
    }
}
