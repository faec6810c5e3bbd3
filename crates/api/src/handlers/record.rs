//! Handlers for saved-login records.
//!
//! Request bodies are taken as raw JSON and read through
//! [`vaultlist_core::record_input`]; every response body is a
//! [`RecordView`], so `website_name` is output-only and the site link can
//! only be set from the URL on creation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use vaultlist_core::error::CoreError;
use vaultlist_core::record::{serialize, RecordView};
use vaultlist_core::record_input::{deserialize, deserialize_linked, deserialize_partial};
use vaultlist_core::types::DbId;
use vaultlist_db::models::data_list::DataListRow;
use vaultlist_db::repositories::{RecordRepo, SiteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn view(row: DataListRow) -> RecordView {
    serialize(&row.into_record())
}

fn views(rows: Vec<DataListRow>) -> Vec<RecordView> {
    rows.into_iter().map(view).collect()
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Record",
        id,
    })
}

async fn ensure_site_exists(state: &AppState, site_id: DbId) -> AppResult<()> {
    SiteRepo::find_by_id(&state.pool, site_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Site",
            id: site_id,
        }))
}

/// GET /api/v1/records
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<RecordView>>> {
    let rows = RecordRepo::list(&state.pool).await?;
    Ok(Json(views(rows)))
}

/// POST /api/v1/records
///
/// Creates a record with no site. Refused when the server requires one.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<RecordView>)> {
    let input = deserialize_linked(&payload, None, &state.config.serializer)?;

    let row = RecordRepo::create(&state.pool, None, &input).await?;
    tracing::info!(record_id = row.id, user_id = user.user_id, "Record created");
    Ok((StatusCode::CREATED, Json(view(row))))
}

/// GET /api/v1/records/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordView>> {
    let row = RecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(view(row)))
}

/// PUT /api/v1/records/{id}
///
/// Full update: every writable field must be supplied.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(payload): Json<Value>,
) -> AppResult<Json<RecordView>> {
    let patch = deserialize(&payload)?.into_patch();
    let row = RecordRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(record_id = id, user_id = user.user_id, "Record updated");
    Ok(Json(view(row)))
}

/// PATCH /api/v1/records/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(payload): Json<Value>,
) -> AppResult<Json<RecordView>> {
    let patch = deserialize_partial(&payload)?;
    let row = RecordRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(record_id = id, user_id = user.user_id, "Record patched");
    Ok(Json(view(row)))
}

/// DELETE /api/v1/records/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if RecordRepo::delete(&state.pool, id).await? {
        tracing::info!(record_id = id, user_id = user.user_id, "Record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/sites/{id}/records
pub async fn list_by_site(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(site_id): Path<DbId>,
) -> AppResult<Json<Vec<RecordView>>> {
    ensure_site_exists(&state, site_id).await?;
    let rows = RecordRepo::list_by_site(&state.pool, site_id).await?;
    Ok(Json(views(rows)))
}

/// POST /api/v1/sites/{id}/records
pub async fn create_for_site(
    State(state): State<AppState>,
    user: AuthUser,
    Path(site_id): Path<DbId>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<RecordView>)> {
    ensure_site_exists(&state, site_id).await?;
    let input = deserialize_linked(&payload, Some(site_id), &state.config.serializer)?;

    let row = RecordRepo::create(&state.pool, Some(site_id), &input).await?;
    tracing::info!(
        record_id = row.id,
        site_id,
        user_id = user.user_id,
        "Record created"
    );
    Ok((StatusCode::CREATED, Json(view(row))))
}
