use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body served by `GET /health`.
#[derive(Serialize)]
pub struct HealthReport {
    /// `ok` when every probe passed, `degraded` otherwise.
    pub status: &'static str,
    /// Connectivity of the PostgreSQL pool.
    pub database: &'static str,
    /// Version the binary was built from.
    pub version: &'static str,
}

/// GET /health -- liveness plus a database round trip.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let database_up = coleta_db::health_check(&state.pool).await.is_ok();

    Json(HealthReport {
        status: if database_up { "ok" } else { "degraded" },
        database: if database_up { "reachable" } else { "unreachable" },
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health probe route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
