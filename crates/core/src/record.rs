//! Saved-login records and their external JSON shape.
//!
//! A [`Record`] optionally points at a [`Site`]. Clients never see the
//! record directly; they see a [`RecordView`], which exposes a fixed
//! allow-list of fields and copies the site's name in as a read-only
//! `website_name`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::field_errors::{FieldErrors, MSG_BLANK};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Field allow-list
// ---------------------------------------------------------------------------

/// Every key of the external representation, in output order.
pub const RECORD_FIELDS: [&str; 5] = ["id", "website_name", "login_link", "username", "password"];

/// Output-only keys. Present in a payload they are ignored.
pub const READ_ONLY_FIELDS: [&str; 2] = ["id", "website_name"];

/// Keys accepted when reading a payload.
pub const WRITABLE_FIELDS: [&str; 3] = ["login_link", "username", "password"];

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// The site a record logs in to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: DbId,
    pub website_name: String,
}

/// A stored login with its (already resolved) site relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: DbId,
    pub login_link: String,
    pub username: String,
    pub password: String,
    pub login_site: Option<Site>,
}

/// External representation of a [`Record`].
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    pub id: DbId,
    pub website_name: Option<String>,
    pub login_link: String,
    pub username: String,
    pub password: String,
}

impl RecordView {
    /// Render as a JSON object whose keys are exactly [`RECORD_FIELDS`].
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "website_name": self.website_name,
            "login_link": self.login_link,
            "username": self.username,
            "password": self.password,
        })
    }
}

// ---------------------------------------------------------------------------
// Serialize direction
// ---------------------------------------------------------------------------

/// Follow `record.login_site.website_name`. `None` when no site is linked.
pub fn derive_website_name(record: &Record) -> Option<String> {
    record
        .login_site
        .as_ref()
        .map(|site| site.website_name.clone())
}

/// Project a record onto its external shape.
pub fn serialize(record: &Record) -> RecordView {
    RecordView {
        id: record.id,
        website_name: derive_website_name(record),
        login_link: record.login_link.clone(),
        username: record.username.clone(),
        password: record.password.clone(),
    }
}

/// Project each record in order.
pub fn serialize_many(records: &[Record]) -> Vec<RecordView> {
    records.iter().map(serialize).collect()
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        serialize(record)
    }
}

// ---------------------------------------------------------------------------
// Site names
// ---------------------------------------------------------------------------

/// Longest accepted site name, in characters.
pub const MAX_WEBSITE_NAME_LENGTH: usize = 255;

/// Trim a proposed site name and check it is non-blank and within length.
pub fn validate_website_name(name: &str) -> Result<String, CoreError> {
    let mut errors = FieldErrors::new();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.add("website_name", MSG_BLANK);
    } else if trimmed.chars().count() > MAX_WEBSITE_NAME_LENGTH {
        errors.add(
            "website_name",
            format!("Ensure this field has no more than {MAX_WEBSITE_NAME_LENGTH} characters."),
        );
    }
    errors.into_result(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn example_record() -> Record {
        Record {
            id: 1,
            login_link: "https://example.com".to_string(),
            username: "alice".to_string(),
            password: "p@ss".to_string(),
            login_site: Some(Site {
                id: 10,
                website_name: "Example".to_string(),
            }),
        }
    }

    #[test]
    fn serializes_example_record() {
        let view = serialize(&example_record());
        assert_eq!(
            view.to_value(),
            serde_json::json!({
                "id": 1,
                "website_name": "Example",
                "login_link": "https://example.com",
                "username": "alice",
                "password": "p@ss",
            })
        );
    }

    #[test]
    fn website_name_follows_current_site() {
        let mut record = example_record();
        assert_eq!(derive_website_name(&record).as_deref(), Some("Example"));

        record.login_site = Some(Site {
            id: 11,
            website_name: "Other".to_string(),
        });
        assert_eq!(serialize(&record).website_name.as_deref(), Some("Other"));
    }

    #[test]
    fn missing_site_gives_null_website_name() {
        let mut record = example_record();
        record.login_site = None;

        let json = serde_json::to_value(serialize(&record)).unwrap();
        assert!(json["website_name"].is_null());
        assert!(json.as_object().unwrap().contains_key("website_name"));
    }

    #[test]
    fn serde_output_matches_allow_list_in_order() {
        let json = serde_json::to_string(&serialize(&example_record())).unwrap();
        let mut last = 0;
        for field in RECORD_FIELDS {
            let pos = json.find(&format!("\"{field}\"")).unwrap();
            assert!(pos >= last, "{field} out of order");
            last = pos;
        }
    }

    #[test]
    fn view_does_not_leak_site_id() {
        let json = serde_json::to_value(serialize(&example_record())).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), RECORD_FIELDS.len());
        for key in keys {
            assert!(RECORD_FIELDS.contains(&key), "unexpected key {key}");
        }
    }

    #[test]
    fn serialize_many_preserves_order() {
        let first = example_record();
        let mut second = example_record();
        second.id = 2;
        second.login_site = None;

        let views = serialize_many(&[first, second]);
        assert_eq!(views.iter().map(|v| v.id).collect::<Vec<_>>(), [1, 2]);
        assert_eq!(views[1].website_name, None);
    }

    #[test]
    fn website_name_is_trimmed() {
        assert_eq!(validate_website_name("  Example ").unwrap(), "Example");
    }

    #[test]
    fn blank_website_name_is_rejected() {
        assert!(validate_website_name("   ").is_err());
    }

    #[test]
    fn overlong_website_name_is_rejected() {
        let name = "w".repeat(MAX_WEBSITE_NAME_LENGTH + 1);
        assert!(validate_website_name(&name).is_err());
        assert!(validate_website_name(&name[1..]).is_ok());
    }

    #[test]
    fn read_only_and_writable_partition_the_allow_list() {
        for field in RECORD_FIELDS {
            let ro = READ_ONLY_FIELDS.contains(&field);
            let rw = WRITABLE_FIELDS.contains(&field);
            assert!(ro ^ rw, "{field} must be exactly one of read-only or writable");
        }
    }
}
