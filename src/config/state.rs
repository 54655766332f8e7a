// Application state module
// Carries configuration and the connection pool through the request path

use sqlx::PgPool;

use super::types::Config;

/// Application state
///
/// The pool lives here rather than in a process-wide static, so handlers
/// receive their database dependency explicitly and tests can build a
/// state around an isolated pool.
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        Self { config, pool }
    }
}
