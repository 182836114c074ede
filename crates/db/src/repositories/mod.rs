//! Repository structs that own all SQL for their tables.
//!
//! Repositories are zero-sized; every method takes the pool as its first
//! argument so callers decide the connection scope. Errors are returned as
//! raw `sqlx::Error` and classified at the API layer.

pub mod item_repo;
pub mod point_repo;

pub use item_repo::ItemRepo;
pub use point_repo::PointRepo;
