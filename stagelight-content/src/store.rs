//! Content store with TTL caching
//!
//! Wraps a `ContentRepository` with an in-memory cache keyed by
//! `section:name`. Entries live for `CACHE_TTL` and are replaced wholesale
//! on expiry or forced refresh; the map is never evicted (the key space is
//! the fixed content catalog, so growth is bounded in practice).

use crate::repository::ContentRepository;
use crate::types::{FeaturesContent, HeroContent, TeamContent};
use serde::de::DeserializeOwned;
use serde_json::Value;
use stagelight_common::{Clock, Error, Result, SystemClock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Cache expiration time (5 minutes)
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    payload: Value,
    fetched_at: Instant,
}

/// Caching front end over a content repository
///
/// Concurrent `load_cached` calls for the same key are not deduplicated:
/// each performs its own fetch and the last write wins. Redundant fetches
/// of immutable-per-release documents are harmless, and every cache write
/// is a full-record replace, so there is no torn state to observe.
pub struct ContentStore {
    repo: Arc<dyn ContentRepository>,
    clock: Arc<dyn Clock>,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl ContentStore {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self::with_clock(repo, Arc::new(SystemClock))
    }

    /// Construct with an injected clock (tests drive expiry manually).
    pub fn with_clock(repo: Arc<dyn ContentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Load a document directly from the repository, bypassing the cache.
    pub async fn load(&self, section: &str, name: &str) -> Result<Value> {
        validate_key(section, name)?;
        self.repo.fetch(section, name).await
    }

    /// Load a document through the cache.
    ///
    /// A cached entry younger than `CACHE_TTL` is returned as-is unless
    /// `force_refresh` is set. Misses, expired entries, and forced
    /// refreshes all fetch from the repository and overwrite the entry,
    /// timestamped at write time.
    pub async fn load_cached(
        &self,
        section: &str,
        name: &str,
        force_refresh: bool,
    ) -> Result<Value> {
        validate_key(section, name)?;
        let key = format!("{}:{}", section, name);

        if !force_refresh {
            let cache = self.cache.lock().await;
            if let Some(entry) = cache.get(&key) {
                if self.clock.now().duration_since(entry.fetched_at) < CACHE_TTL {
                    debug!("Content cache hit: {}", key);
                    return Ok(entry.payload.clone());
                }
            }
        }

        // Fetch outside the lock so a slow repository never blocks readers
        // of other keys. Parallel fetches for the same key may race; the
        // last full-record write wins.
        let payload = self.repo.fetch(section, name).await?;

        let mut cache = self.cache.lock().await;
        cache.insert(
            key,
            CacheEntry {
                payload: payload.clone(),
                fetched_at: self.clock.now(),
            },
        );

        Ok(payload)
    }

    /// Hero section content (`home/hero`).
    pub async fn load_hero(&self) -> Result<HeroContent> {
        self.load_typed("home", "hero").await
    }

    /// Features section content (`home/features`).
    pub async fn load_features(&self) -> Result<FeaturesContent> {
        self.load_typed("home", "features").await
    }

    /// Team roster content (`about/team`).
    pub async fn load_team(&self) -> Result<TeamContent> {
        self.load_typed("about", "team").await
    }

    async fn load_typed<T: DeserializeOwned>(&self, section: &str, name: &str) -> Result<T> {
        let value = self.load_cached(section, name, false).await?;
        serde_json::from_value(value).map_err(|cause| {
            warn!(
                "Content document {}/{} does not match its schema: {}",
                section, name, cause
            );
            Error::content_not_found(section, name)
        })
    }

    /// Drop every cached entry.
    pub async fn invalidate(&self) {
        self.cache.lock().await.clear();
    }

    /// Number of cached entries (diagnostics only).
    pub async fn cached_entries(&self) -> usize {
        self.cache.lock().await.len()
    }
}

fn validate_key(section: &str, name: &str) -> Result<()> {
    for (label, value) in [("section", section), ("name", name)] {
        if value.is_empty() {
            return Err(Error::InvalidInput(format!("empty content {}", label)));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidInput(format!(
                "invalid content {}: {}",
                label, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_catalog_keys() {
        assert!(validate_key("home", "hero").is_ok());
        assert!(validate_key("about", "team").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_empty() {
        assert!(validate_key("", "hero").is_err());
        assert!(validate_key("home", "").is_err());
    }

    #[test]
    fn test_validate_key_rejects_path_traversal() {
        assert!(validate_key("..", "hero").is_err());
        assert!(validate_key("home", "../secret").is_err());
    }
}
