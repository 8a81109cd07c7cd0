//! Content API
//!
//! Serves the landing-page content documents from the shared
//! `ContentStore`. A cache-fresh document costs no repository access;
//! `?refresh=true` forces one.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    /// Bypass the cache and refetch the document
    #[serde(default)]
    pub refresh: bool,
}

/// GET /content/:section/:name
pub async fn get_content(
    State(state): State<AppState>,
    Path((section, name)): Path<(String, String)>,
    Query(query): Query<ContentQuery>,
) -> ApiResult<Json<Value>> {
    debug!(
        "Content request: {}/{} (refresh={})",
        section, name, query.refresh
    );
    let document = state
        .store
        .load_cached(&section, &name, query.refresh)
        .await?;
    Ok(Json(document))
}

/// Build content routes
pub fn content_routes() -> Router<AppState> {
    Router::new().route("/content/:section/:name", get(get_content))
}
