//! HTTP API handlers for stagelight-server

pub mod content;
pub mod health;
pub mod playlist;

pub use content::content_routes;
pub use health::health_routes;
pub use playlist::playlist_routes;
