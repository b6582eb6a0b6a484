#![forbid(unsafe_code)]
use anyhow::Result;
use restaurant_backend::{app, config::Config};
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let config = Config::from_env()?;

    info!(
        "Starting server for {} (wasm bundle from {})",
        config.frontend_dir.display(),
        config.wasm_pkg_dir.display()
    );

    // listening globally on the configured port
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    axum::serve(listener, app(&config)).await?;
    Ok(())
}
