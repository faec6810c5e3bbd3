//! Repository for the `data_list` table.
//!
//! Every read joins `sites` so the returned row carries the current
//! `website_name` of the linked site (or `NULL` when unlinked).

use sqlx::PgPool;
use vaultlist_core::record_input::{RecordInput, RecordPatch};
use vaultlist_core::types::DbId;

use crate::models::data_list::DataListRow;

/// Select list over `d` (`data_list`) and `s` (`sites`).
const JOINED_COLUMNS: &str = "d.id, d.login_site_id, s.website_name, d.login_link, d.username, \
                              d.password, d.created_at, d.updated_at";

/// Provides CRUD operations for saved logins.
pub struct RecordRepo;

impl RecordRepo {
    /// Insert a new record linked to `site_id` (or to no site).
    ///
    /// A `site_id` that does not exist fails with a foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        site_id: Option<DbId>,
        input: &RecordInput,
    ) -> Result<DataListRow, sqlx::Error> {
        let query = format!(
            "WITH d AS (
                INSERT INTO data_list (login_site_id, login_link, username, password)
                VALUES ($1, $2, $3, $4)
                RETURNING *
             )
             SELECT {JOINED_COLUMNS}
             FROM d LEFT JOIN sites s ON s.id = d.login_site_id"
        );
        sqlx::query_as::<_, DataListRow>(&query)
            .bind(site_id)
            .bind(&input.login_link)
            .bind(&input.username)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    /// Find a record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DataListRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM data_list d LEFT JOIN sites s ON s.id = d.login_site_id
             WHERE d.id = $1"
        );
        sqlx::query_as::<_, DataListRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all records in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<DataListRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM data_list d LEFT JOIN sites s ON s.id = d.login_site_id
             ORDER BY d.id"
        );
        sqlx::query_as::<_, DataListRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the records linked to one site in insertion order.
    pub async fn list_by_site(
        pool: &PgPool,
        site_id: DbId,
    ) -> Result<Vec<DataListRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM data_list d JOIN sites s ON s.id = d.login_site_id
             WHERE d.login_site_id = $1
             ORDER BY d.id"
        );
        sqlx::query_as::<_, DataListRow>(&query)
            .bind(site_id)
            .fetch_all(pool)
            .await
    }

    /// Update a record. Only non-`None` fields in `input` are applied; the
    /// site link is never changed here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &RecordPatch,
    ) -> Result<Option<DataListRow>, sqlx::Error> {
        let query = format!(
            "WITH d AS (
                UPDATE data_list SET
                    login_link = COALESCE($2, login_link),
                    username = COALESCE($3, username),
                    password = COALESCE($4, password),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {JOINED_COLUMNS}
             FROM d LEFT JOIN sites s ON s.id = d.login_site_id"
        );
        sqlx::query_as::<_, DataListRow>(&query)
            .bind(id)
            .bind(&input.login_link)
            .bind(&input.username)
            .bind(&input.password)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM data_list WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
