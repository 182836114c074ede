use std::sync::Arc;

use crate::config::ServerConfig;

/// What every handler gets through `State<AppState>`.
///
/// Cloning is cheap: the pool is reference-counted internally and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: coleta_db::DbPool,
    /// Upload directory, public base URL, CORS origins, timeouts.
    pub config: Arc<ServerConfig>,
}
