//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod record_repo;
pub mod site_repo;
pub mod user_repo;

pub use record_repo::RecordRepo;
pub use site_repo::SiteRepo;
pub use user_repo::UserRepo;
