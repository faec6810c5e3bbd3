//! Route definitions for the `/sites` resource.
//!
//! Also nests site-scoped record routes under `/sites/{id}/records`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{record, site};
use crate::state::AppState;

/// Routes mounted at `/sites`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
///
/// GET    /{id}/records           -> record::list_by_site
/// POST   /{id}/records           -> record::create_for_site
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::list).post(site::create))
        .route(
            "/{id}",
            get(site::get_by_id).put(site::update).delete(site::delete),
        )
        .route(
            "/{id}/records",
            get(record::list_by_site).post(record::create_for_site),
        )
}
