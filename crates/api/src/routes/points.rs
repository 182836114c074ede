//! Route definitions for collection points.

use axum::routing::get;
use axum::Router;

use crate::handlers::points;
use crate::state::AppState;

/// Point routes mounted at the application root.
///
/// ```text
/// GET  /points       -> index (city, uf, items query params)
/// POST /points       -> create (multipart registration)
/// GET  /points/{id}  -> show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/points", get(points::index).post(points::create))
        .route("/points/{id}", get(points::show))
}
