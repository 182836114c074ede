//! Request handlers.
//!
//! Handlers decode the wire format, delegate to `coleta_db` repositories,
//! and map errors via [`crate::error::AppError`]. Read handlers decorate
//! rows into the view types from [`crate::response`].

pub mod items;
pub mod points;
