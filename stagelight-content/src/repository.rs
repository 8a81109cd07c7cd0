//! Content repository trait and filesystem implementation
//!
//! The store addresses documents by `(section, name)`; where they actually
//! live is the repository's business. The shipped implementation reads
//! `<root>/<section>/<name>.json`, but any key-value document source can
//! stand in behind the trait.

use async_trait::async_trait;
use serde_json::Value;
use stagelight_common::{Error, Result};
use std::path::PathBuf;
use tracing::warn;

/// Opaque key-value source of content documents
///
/// Every failure mode (missing document, unreadable, malformed JSON) is
/// reported as `Error::NotFound` naming the `section/name` pair; the
/// underlying cause is logged, never surfaced. A single failed attempt is
/// terminal — no retries.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn fetch(&self, section: &str, name: &str) -> Result<Value>;
}

/// Filesystem-backed repository reading `<root>/<section>/<name>.json`
pub struct FsContentRepository {
    root: PathBuf,
}

impl FsContentRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentRepository for FsContentRepository {
    async fn fetch(&self, section: &str, name: &str) -> Result<Value> {
        let path = self.root.join(section).join(format!("{}.json", name));

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(cause) => {
                warn!("Failed to load content {}/{}: {}", section, name, cause);
                return Err(Error::content_not_found(section, name));
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(cause) => {
                warn!("Malformed content document {}/{}: {}", section, name, cause);
                Err(Error::content_not_found(section, name))
            }
        }
    }
}
