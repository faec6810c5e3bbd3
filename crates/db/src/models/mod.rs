//! Row structs and write DTOs.
//!
//! - `site`: `SiteRow` plus the `CreateSite` / `UpdateSite` bodies the HTTP
//!   layer deserializes directly.
//! - `data_list`: `DataListRow`, a record joined with its site name. Record
//!   writes are validated in `vaultlist_core::record_input` instead.
//! - `user`: `User`, its public `UserResponse`, and `CreateUser` built by
//!   the register handler after hashing.

pub mod data_list;
pub mod site;
pub mod user;
