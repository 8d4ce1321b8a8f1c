use sqlx::SqlitePool;

use crate::auth::Authenticator;

/// Shared handler context. Built once at startup and cloned per request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: SqlitePool,
    pub authenticator: Authenticator,
}

impl AppState {
    pub fn new(pool: SqlitePool, authenticator: Authenticator) -> Self {
        Self { pool, authenticator }
    }
}
