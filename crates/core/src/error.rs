use crate::field_errors::FieldErrors;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Per-field validation failure produced while reading an input payload.
    #[error("Validation failed: {0}")]
    InvalidFields(FieldErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
