pub mod health;
pub mod items;
pub mod points;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (flat, no version prefix).
///
/// Route hierarchy:
///
/// ```text
/// /health            service + database health
///
/// /items             GET  catalog of recyclable items
///
/// /points            GET  search points (city, uf, items)
/// /points            POST register point (multipart)
/// /points/{id}       GET  point detail with accepted item titles
///
/// /uploads/{file}    static upload store (mounted in main)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(items::router())
        .merge(points::router())
}
