use clap::Parser;
use tracing_subscriber::EnvFilter;

use hahimur::cli::{self, Cli};
use hahimur::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, AUTH_*, etc.
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `hahimur token` output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hahimur=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Starting Hahimur API in {:?} mode", config.environment);

    cli::run(Cli::parse(), config).await
}
