//! Backdrop playlist API
//!
//! Exposes the built-in rotation catalog so the front end and the service
//! agree on one source of truth for the backdrop videos.

use axum::{routing::get, Json, Router};
use stagelight_backdrop::catalog::background_videos;
use stagelight_backdrop::Video;

use crate::AppState;

/// GET /backdrop/playlist
pub async fn get_playlist() -> Json<Vec<Video>> {
    Json(background_videos())
}

/// Build playlist routes
pub fn playlist_routes() -> Router<AppState> {
    Router::new().route("/backdrop/playlist", get(get_playlist))
}
