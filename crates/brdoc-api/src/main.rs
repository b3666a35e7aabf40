//! # brdoc-api entry point
//!
//! Reads configuration from the environment, installs tracing and serves
//! the router until interrupted.

use tracing_subscriber::EnvFilter;

use brdoc_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();
    let addr = config.bind_addr();
    let app = brdoc_api::app(AppState::with_config(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("brdoc-api listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
