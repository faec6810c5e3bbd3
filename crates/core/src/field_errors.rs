//! Field-keyed validation messages.
//!
//! Rendered to clients as `{ "field": ["message", ...] }`. Keys are kept in
//! sorted order so error bodies are stable across runs.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Message for a writable field absent from a full payload.
pub const MSG_REQUIRED: &str = "This field is required.";
/// Message for a writable field explicitly set to `null`.
pub const MSG_NULL: &str = "This field may not be null.";
/// Message for a string field that is empty after trimming.
pub const MSG_BLANK: &str = "This field may not be blank.";
/// Message for a value that cannot be read as a string.
pub const MSG_NOT_A_STRING: &str = "Not a valid string.";

/// Ordered mapping of field name to the messages raised against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`. Repeated calls append.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for one field, if any were recorded.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Field names with at least one message, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge `other` into `self`, appending messages per field.
    pub fn extend(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// `Ok(value)` when no errors were recorded, otherwise
    /// [`CoreError::InvalidFields`].
    pub fn into_result<T>(self, value: T) -> Result<T, CoreError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        CoreError::InvalidFields(errors)
    }
}
