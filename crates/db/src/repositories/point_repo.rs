//! Repository for the `points` and `point_items` tables.
//!
//! Point creation is transactional: the point row and its item associations
//! either all land or none do. Searches join through `point_items` and
//! deduplicate, so a point matching several requested items appears once.

use coleta_core::types::DbId;
use sqlx::PgPool;

use crate::models::point::{CreatePoint, Point, PointSearch};

/// Column list for `points` queries.
const POINT_COLUMNS: &str = "\
    id, image, name, email, whatsapp, latitude, longitude, \
    city, uf, created_at, updated_at";

/// Provides creation and lookup of collection points.
pub struct PointRepo;

impl PointRepo {
    /// Insert a point and its item associations in a single transaction.
    ///
    /// The caller is expected to have validated `item_ids` against the
    /// catalog; an unknown id still fails the foreign key here, rolling the
    /// whole registration back.
    pub async fn create_with_items(
        pool: &PgPool,
        input: &CreatePoint,
        item_ids: &[DbId],
    ) -> Result<Point, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO points (image, name, email, whatsapp, latitude, longitude, city, uf) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {POINT_COLUMNS}"
        );
        let point = sqlx::query_as::<_, Point>(&query)
            .bind(&input.image)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.whatsapp)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.city)
            .bind(&input.uf)
            .fetch_one(&mut *tx)
            .await?;

        for &item_id in item_ids {
            sqlx::query("INSERT INTO point_items (point_id, item_id) VALUES ($1, $2)")
                .bind(point.id)
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(point)
    }

    /// Find a point by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Point>, sqlx::Error> {
        let query = format!("SELECT {POINT_COLUMNS} FROM points WHERE id = $1");
        sqlx::query_as::<_, Point>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search points by exact city/uf that accept at least one of the items.
    ///
    /// `SELECT DISTINCT` collapses points matching several of the requested
    /// items to a single row. An empty id list matches nothing.
    pub async fn search(pool: &PgPool, params: &PointSearch) -> Result<Vec<Point>, sqlx::Error> {
        sqlx::query_as::<_, Point>(
            "SELECT DISTINCT p.* FROM points p \
             JOIN point_items pi ON pi.point_id = p.id \
             WHERE p.city = $1 AND p.uf = $2 AND pi.item_id = ANY($3) \
             ORDER BY p.id",
        )
        .bind(&params.city)
        .bind(&params.uf)
        .bind(&params.item_ids)
        .fetch_all(pool)
        .await
    }

    /// Titles of the items a point accepts, in catalog order.
    pub async fn item_titles(pool: &PgPool, point_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT i.title FROM items i \
             JOIN point_items pi ON pi.item_id = i.id \
             WHERE pi.point_id = $1 \
             ORDER BY i.id",
        )
        .bind(point_id)
        .fetch_all(pool)
        .await
    }
}
