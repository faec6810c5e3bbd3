//! Reading client payloads into record writes.
//!
//! Only [`WRITABLE_FIELDS`] are consulted. `id`, `website_name` and any
//! unknown keys are ignored, so a payload can never re-point a record at a
//! different site. Every problem found is reported in one
//! [`CoreError::InvalidFields`]; a payload either yields a complete value or
//! nothing.

use serde_json::{Map, Value};
use validator::Validate;

use crate::error::CoreError;
use crate::field_errors::{
    FieldErrors, MSG_BLANK, MSG_NOT_A_STRING, MSG_NULL, MSG_REQUIRED, NON_FIELD_ERRORS,
};
use crate::record::{Record, WRITABLE_FIELDS};
use crate::types::DbId;

/// Longest accepted value for any writable field, in characters.
pub const MAX_FIELD_LENGTH: u64 = 255;

/// Name of the relation reported when a site is required but absent.
pub const LOGIN_SITE_FIELD: &str = "login_site";

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Knobs for the write path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializerConfig {
    /// Reject record writes that do not link a site.
    pub require_login_site: bool,
}

/// Enforce [`SerializerConfig::require_login_site`] for a write that links
/// `site_id` (or nothing).
pub fn validate_login_site(
    site_id: Option<DbId>,
    config: &SerializerConfig,
) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    if config.require_login_site && site_id.is_none() {
        errors.add(LOGIN_SITE_FIELD, MSG_REQUIRED);
    }
    errors.into_result(())
}

// ---------------------------------------------------------------------------
// Validated write values
// ---------------------------------------------------------------------------

/// A complete write: every writable field present and valid.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RecordInput {
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub login_link: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub username: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub password: String,
}

/// A partial write. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct RecordPatch {
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub login_link: Option<String>,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub username: Option<String>,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub password: Option<String>,
}

impl RecordInput {
    /// Overwrite the writable fields of `record`. The site link is untouched.
    pub fn apply_to(&self, record: &mut Record) {
        record.login_link.clone_from(&self.login_link);
        record.username.clone_from(&self.username);
        record.password.clone_from(&self.password);
    }

    /// The same write expressed as a patch that sets every field.
    pub fn into_patch(self) -> RecordPatch {
        RecordPatch {
            login_link: Some(self.login_link),
            username: Some(self.username),
            password: Some(self.password),
        }
    }
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.login_link.is_none() && self.username.is_none() && self.password.is_none()
    }

    /// Overwrite only the fields this patch carries.
    pub fn apply_to(&self, record: &mut Record) {
        if let Some(login_link) = &self.login_link {
            record.login_link.clone_from(login_link);
        }
        if let Some(username) = &self.username {
            record.username.clone_from(username);
        }
        if let Some(password) = &self.password {
            record.password.clone_from(password);
        }
    }
}

// ---------------------------------------------------------------------------
// Deserialize direction
// ---------------------------------------------------------------------------

/// Read a full write from `payload`. Missing writable fields are errors.
pub fn deserialize(payload: &Value) -> Result<RecordInput, CoreError> {
    let mut patch = read_fields(payload, true)?;

    // read_fields has already reported any absent field, so all are present.
    let input = RecordInput {
        login_link: patch.login_link.take().unwrap_or_default(),
        username: patch.username.take().unwrap_or_default(),
        password: patch.password.take().unwrap_or_default(),
    };
    check_lengths(&input)?;
    Ok(input)
}

/// [`deserialize`] for a write linking `site_id`, with the site policy
/// checked in the same pass. Payload and `login_site` errors are reported
/// together.
pub fn deserialize_linked(
    payload: &Value,
    site_id: Option<DbId>,
    config: &SerializerConfig,
) -> Result<RecordInput, CoreError> {
    let site_errors = match validate_login_site(site_id, config) {
        Err(CoreError::InvalidFields(errors)) => errors,
        Err(other) => return Err(other),
        Ok(()) => FieldErrors::new(),
    };
    match deserialize(payload) {
        Ok(input) => site_errors.into_result(input),
        Err(CoreError::InvalidFields(mut errors)) => {
            errors.extend(site_errors);
            Err(errors.into())
        }
        Err(other) => Err(other),
    }
}

/// Read a partial write from `payload`. Absent fields stay `None`.
pub fn deserialize_partial(payload: &Value) -> Result<RecordPatch, CoreError> {
    let patch = read_fields(payload, false)?;
    check_lengths(&patch)?;
    Ok(patch)
}

fn read_fields(payload: &Value, required: bool) -> Result<RecordPatch, CoreError> {
    let object = as_object(payload)?;
    let mut errors = FieldErrors::new();

    let [login_link, username, password] =
        WRITABLE_FIELDS.map(|field| read_string_field(object, field, required, &mut errors));

    errors.into_result(RecordPatch {
        login_link,
        username,
        password,
    })
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, CoreError> {
    match payload {
        Value::Object(object) => Ok(object),
        other => {
            let mut errors = FieldErrors::new();
            errors.add(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected an object, but got {}.",
                    json_type_name(other)
                ),
            );
            Err(errors.into())
        }
    }
}

/// Read one string field, recording at most one message for it.
fn read_string_field(
    object: &Map<String, Value>,
    field: &str,
    required: bool,
    errors: &mut FieldErrors,
) -> Option<String> {
    let raw = match object.get(field) {
        None => {
            if required {
                errors.add(field, MSG_REQUIRED);
            }
            return None;
        }
        Some(Value::Null) => {
            errors.add(field, MSG_NULL);
            return None;
        }
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
            errors.add(field, MSG_NOT_A_STRING);
            return None;
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, MSG_BLANK);
        return None;
    }
    Some(trimmed.to_string())
}

fn check_lengths<T: Validate>(value: &T) -> Result<(), CoreError> {
    let Err(report) = value.validate() else {
        return Ok(());
    };

    let mut errors = FieldErrors::new();
    for (field, failures) in report.field_errors() {
        for failure in failures {
            let message = match failure.code.as_ref() {
                "length" => too_long_message(),
                code => code.to_string(),
            };
            errors.add(field.to_string(), message);
        }
    }
    errors.into_result(())
}

fn too_long_message() -> String {
    format!("Ensure this field has no more than {MAX_FIELD_LENGTH} characters.")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
