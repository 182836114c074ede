//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Plain DTO structs for inserts and searches where the operation needs one

pub mod item;
pub mod point;
