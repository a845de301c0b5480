//! Bugshot Server
//!
//! HTTP backend that analyzes bug screenshots with a vision model and files
//! the results as Jira tickets.

use anyhow::Result;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use bugshot_server::{api, AppState, SettingsManager};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Parser, Debug)]
#[command(name = "bugshotd")]
#[command(about = "Bugshot server - screenshot bug report backend", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3001)]
    port: u16,

    /// Path to the settings file
    #[arg(short, long, default_value = "settings.json")]
    settings: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Origin allowed to call the API (the dev UI)
    #[arg(long, default_value = "http://localhost:5173")]
    cors_origin: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .init();

    tracing::info!("Bugshot server starting...");
    tracing::info!("Settings file: {}", args.settings.display());

    let settings_manager = Arc::new(SettingsManager::new(args.settings));
    tracing::info!("Settings manager initialized");

    let cors = CorsLayer::new()
        .allow_origin(args.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let app = api::router(AppState::new(settings_manager)).layer(cors);

    let addr = format!("127.0.0.1:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
