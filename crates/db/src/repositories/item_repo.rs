//! Repository for the `items` catalog table.

use coleta_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::Item;

/// Column list for `items` queries.
const ITEM_COLUMNS: &str = "id, title, image, created_at, updated_at";

/// Read-only access to the recyclable-item catalog.
pub struct ItemRepo;

impl ItemRepo {
    /// List the entire catalog in id order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Of the given ids, return those that are not in the catalog.
    ///
    /// The returned ids keep the order of the input. Used to reject point
    /// registrations that reference unknown items before any row is written.
    pub async fn find_missing(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        let existing: Vec<DbId> = sqlx::query_scalar("SELECT id FROM items WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }
}
