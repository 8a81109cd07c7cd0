//! stagelight-server - Landing-page content and backdrop service
//!
//! Serves the content documents behind the marketing site (with TTL
//! caching), the backdrop video catalog, and a health check the front end
//! polls for its connected indicator.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use clap::Parser;
use stagelight_content::{ContentStore, FsContentRepository};
use stagelight_server::config::{Args, Config};
use stagelight_server::{build_router, AppState};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stagelight_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::resolve(args).context("Failed to resolve configuration")?;

    info!("Starting stagelight-server");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Content directory: {}", config.content_dir.display());

    let repo = Arc::new(FsContentRepository::new(&config.content_dir));
    let store = Arc::new(ContentStore::new(repo));
    let state = AppState::new(store);

    let mut app = build_router(state).layer(TraceLayer::new_for_http());
    if let Some(origin) = &config.cors_origin {
        let header = origin
            .parse::<HeaderValue>()
            .context("Invalid CORS origin")?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(header)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS]),
        );
        info!("CORS origin: {}", origin);
    }

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
