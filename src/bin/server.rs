use anyhow::{Context, Result};
use log::info;

use tabrec::env_config::ServerConfig;
use tabrec::server::create_router;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = ServerConfig::from_env()?;
    let addr = cfg.socket_addr();
    info!("Starting tab recommendation server...");

    let app = create_router();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server is running on {}. Press Ctrl+C to stop.", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Stopping server...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}
