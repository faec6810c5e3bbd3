//! Site entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vaultlist_core::record::Site;
use vaultlist_core::types::{DbId, Timestamp};

/// A site row from the `sites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteRow {
    pub id: DbId,
    pub website_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SiteRow> for Site {
    fn from(row: SiteRow) -> Self {
        Site {
            id: row.id,
            website_name: row.website_name,
        }
    }
}

/// DTO for creating a new site.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSite {
    pub website_name: String,
}

/// DTO for updating an existing site. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSite {
    pub website_name: Option<String>,
}
