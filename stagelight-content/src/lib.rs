//! # Stagelight Content Library
//!
//! Loading, caching, and typing of the JSON content documents that drive
//! the landing pages:
//! - Typed document models (hero, features, team)
//! - `ContentRepository` trait with a filesystem implementation
//! - `ContentStore` with a TTL cache and forced-refresh path

pub mod repository;
pub mod store;
pub mod types;

pub use repository::{ContentRepository, FsContentRepository};
pub use store::{ContentStore, CACHE_TTL};
pub use types::{
    AnimationSettings, CallToAction, FeatureItem, FeaturesContent, HeroContent, TeamContent,
    TeamMember,
};
