//! Application state

use sqlx::PgPool;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// The pool is the single shared store handle; it is owned here and injected
/// into every handler through axum's `State`, never reached as a global.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// JWT secret for dashboard authentication
    pub jwt_secret: String,
}

impl AppState {
    /// Create a new AppState: connect the pool and run pending migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
        })
    }
}
