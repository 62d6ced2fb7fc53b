//! parish-server — church-management service
//!
//! Long-running service that:
//! - Manages the member registry (CRUD, JWT authenticated)
//! - Keeps ministry/department member counts consistent with the member table
//! - Records contributions and expenses for the dashboard

mod api;
mod auth;
mod config;
mod db;
mod error;
mod state;
mod util;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parish_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting parish-server (env: {})", config.environment);

    // Initialize application state (pool + migrations)
    let state = AppState::new(&config).await?;

    // Make counts consistent with whatever the member table holds at boot;
    // covers the stale window left by a recompute that failed mid-run.
    db::counts::recompute(&state.pool).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("parish-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
