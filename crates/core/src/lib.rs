//! Domain types and the record serializer for vaultlist.
//!
//! This crate performs no I/O. Storage lives in `vaultlist-db` and the HTTP
//! surface in `vaultlist-api`; both funnel records through [`record`] and
//! [`record_input`] so the external shape is defined in exactly one place.

pub mod error;
pub mod field_errors;
pub mod record;
pub mod record_input;
pub mod types;
