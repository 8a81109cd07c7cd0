//! stagelight-server library interface
//!
//! Exposes the router and application state so integration tests can
//! drive the HTTP surface without binding a socket.

pub mod api;
pub mod config;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use stagelight_content::ContentStore;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Content store backing the content API
    pub store: Arc<ContentStore>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Plain-text liveness probe at the root
        .route("/", get(api::health::liveness))
        .merge(api::health::health_routes())
        .merge(api::content::content_routes())
        .merge(api::playlist::playlist_routes())
        .with_state(state)
}
