//! Recyclable-item catalog model.

use coleta_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `items` table.
///
/// The catalog is fixed seed data; rows are never inserted or mutated at
/// runtime, only read.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub title: String,
    /// Artwork filename under the static uploads directory (e.g. `"oleo.svg"`).
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
