//! Repository for the `sites` table.

use sqlx::PgPool;
use vaultlist_core::types::DbId;

use crate::models::site::{CreateSite, SiteRow, UpdateSite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, website_name, created_at, updated_at";

/// Provides CRUD operations for sites.
pub struct SiteRepo;

impl SiteRepo {
    /// Insert a new site, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSite) -> Result<SiteRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO sites (website_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteRow>(&query)
            .bind(&input.website_name)
            .fetch_one(pool)
            .await
    }

    /// Find a site by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SiteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE id = $1");
        sqlx::query_as::<_, SiteRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sites alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites ORDER BY website_name, id");
        sqlx::query_as::<_, SiteRow>(&query).fetch_all(pool).await
    }

    /// Update a site. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSite,
    ) -> Result<Option<SiteRow>, sqlx::Error> {
        let query = format!(
            "UPDATE sites SET
                website_name = COALESCE($2, website_name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteRow>(&query)
            .bind(id)
            .bind(&input.website_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a site by ID. Linked records keep existing with no site.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
