//! Collection point models and DTOs.

use coleta_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `points` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Point {
    pub id: DbId,
    /// Stored photo filename (content-addressed), not the client-supplied name.
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    /// Two-letter Brazilian state code.
    pub uf: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a new point. Built from an already-validated
/// registration, after the photo has been written to disk.
#[derive(Debug, Clone)]
pub struct CreatePoint {
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

/// Search filter for the point listing: exact city and uf match plus at
/// least one accepted item out of `item_ids`.
#[derive(Debug, Clone)]
pub struct PointSearch {
    pub city: String,
    pub uf: String,
    pub item_ids: Vec<DbId>,
}
