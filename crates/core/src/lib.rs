//! Domain logic for the collection-points registry.
//!
//! Pure building blocks with no I/O: shared id and timestamp aliases, the
//! domain error type, item-id list parsing, upload filename derivation,
//! and the point-registration payload validator.

pub mod error;
pub mod items;
pub mod registration;
pub mod types;
pub mod upload;
