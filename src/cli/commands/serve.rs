use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::app::app;
use crate::auth::{AuthMode, Authenticator};
use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::state::AppState;

pub async fn handle(config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to open database")?;
    DatabaseManager::ensure_schema(&pool)
        .await
        .context("failed to create tables")?;

    let authenticator = Authenticator::from_config(&config.security)?;
    if authenticator.mode() == AuthMode::Disabled {
        warn!("Authorization is disabled; every endpoint is public");
    }

    let mut router = app(AppState::new(pool.clone(), authenticator));
    if config.api.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    let bind_addr = format!("0.0.0.0:{}", port.unwrap_or(config.api.port));
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Hahimur API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
