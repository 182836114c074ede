//! Read-time response views.
//!
//! Wire payloads decorate stored filenames with an absolute `image_url`
//! derived from the configured public base URL, so the base URL can change
//! without a data migration. Audit timestamps stay internal.

use coleta_core::types::DbId;
use coleta_db::models::item::Item;
use coleta_db::models::point::Point;
use serde::Serialize;

/// Absolute URL for a file in the upload store.
pub fn upload_url(public_base_url: &str, filename: &str) -> String {
    format!("{}/uploads/{filename}", public_base_url.trim_end_matches('/'))
}

/// Catalog entry as served to clients.
#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
}

impl ItemView {
    pub fn from_item(item: Item, public_base_url: &str) -> Self {
        Self {
            id: item.id,
            image_url: upload_url(public_base_url, &item.image),
            title: item.title,
        }
    }
}

/// Point as served by the search listing and the detail endpoint.
#[derive(Debug, Serialize)]
pub struct PointView {
    pub id: DbId,
    pub image: String,
    pub image_url: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

impl PointView {
    pub fn from_point(point: Point, public_base_url: &str) -> Self {
        Self {
            id: point.id,
            image_url: upload_url(public_base_url, &point.image),
            image: point.image,
            name: point.name,
            email: point.email,
            whatsapp: point.whatsapp,
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city,
            uf: point.uf,
        }
    }
}

/// Detail payload: the point plus the titles of the items it accepts.
#[derive(Debug, Serialize)]
pub struct PointDetail {
    pub point: PointView,
    pub items: Vec<String>,
}

/// Creation response: the row as written. The stored filename is returned
/// as-is; URL derivation happens only on reads.
#[derive(Debug, Serialize)]
pub struct CreatedPoint {
    pub id: DbId,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

impl From<Point> for CreatedPoint {
    fn from(point: Point) -> Self {
        Self {
            id: point.id,
            image: point.image,
            name: point.name,
            email: point.email,
            whatsapp: point.whatsapp,
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city,
            uf: point.uf,
        }
    }
}
