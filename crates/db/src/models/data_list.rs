//! Saved-login rows from the `data_list` table.
//!
//! Writes go through [`vaultlist_core::record_input`], so there are no
//! `Deserialize` DTOs here.

use sqlx::FromRow;
use vaultlist_core::record::{Record, Site};
use vaultlist_core::types::{DbId, Timestamp};

/// A `data_list` row joined with its (optional) site.
///
/// `website_name` is `NULL` whenever `login_site_id` is.
#[derive(Debug, Clone, FromRow)]
pub struct DataListRow {
    pub id: DbId,
    pub login_site_id: Option<DbId>,
    pub website_name: Option<String>,
    pub login_link: String,
    pub username: String,
    pub password: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DataListRow {
    /// Rebuild the domain record with its resolved site.
    pub fn into_record(self) -> Record {
        let login_site = match (self.login_site_id, self.website_name) {
            (Some(id), Some(website_name)) => Some(Site { id, website_name }),
            _ => None,
        };
        Record {
            id: self.id,
            login_link: self.login_link,
            username: self.username,
            password: self.password,
            login_site,
        }
    }
}

impl From<DataListRow> for Record {
    fn from(row: DataListRow) -> Self {
        row.into_record()
    }
}
