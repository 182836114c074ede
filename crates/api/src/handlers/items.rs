//! Handlers for the `/items` resource.

use axum::extract::State;
use axum::Json;
use coleta_db::repositories::ItemRepo;

use crate::error::AppResult;
use crate::response::ItemView;
use crate::state::AppState;

/// GET /items
///
/// The seeded catalog of recyclable items, each decorated with the
/// absolute URL of its artwork.
pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<ItemView>>> {
    let items = ItemRepo::list_all(&state.pool).await?;

    let views = items
        .into_iter()
        .map(|item| ItemView::from_item(item, &state.config.public_base_url))
        .collect();
    Ok(Json(views))
}
