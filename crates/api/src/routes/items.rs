//! Route definitions for the recyclable-item catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Catalog routes mounted at the application root.
///
/// ```text
/// GET /items -> index
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/items", get(items::index))
}
