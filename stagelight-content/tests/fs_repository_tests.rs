//! Filesystem repository tests against a temporary content tree

use serde_json::json;
use stagelight_common::Error;
use stagelight_content::{ContentRepository, ContentStore, FsContentRepository};
use std::sync::Arc;
use tempfile::TempDir;

/// Write a minimal content tree: home/hero.json, home/features.json
fn content_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let home = dir.path().join("home");
    std::fs::create_dir_all(&home).unwrap();

    std::fs::write(
        home.join("hero.json"),
        serde_json::to_string_pretty(&json!({
            "title": "Build Better Web Experiences",
            "subtitle": "Ship faster",
            "description": "A platform for modern landing pages",
            "ctaPrimary": { "text": "Get started", "href": "/signup" },
            "ctaSecondary": { "text": "Learn more", "href": "/docs" },
            "backgroundGradient": { "from": "#0f172a", "to": "#1e293b", "opacity": 0.8 },
            "animationSettings": { "speed": "normal", "pattern": "fade", "intensity": 0.5 },
            "imageUrl": "/img/hero.webp",
            "imageAlt": "Product screenshot"
        }))
        .unwrap(),
    )
    .unwrap();

    std::fs::write(home.join("broken.json"), "{ not json").unwrap();

    dir
}

#[tokio::test]
async fn reads_document_from_disk() {
    let dir = content_tree();
    let repo = FsContentRepository::new(dir.path());

    let value = repo.fetch("home", "hero").await.unwrap();
    assert_eq!(value["title"], "Build Better Web Experiences");
}

#[tokio::test]
async fn missing_document_is_not_found() {
    let dir = content_tree();
    let repo = FsContentRepository::new(dir.path());

    let err = repo.fetch("home", "missing").await.unwrap_err();
    assert_eq!(err.to_string(), "Content not found: home/missing");
}

#[tokio::test]
async fn malformed_document_is_not_found() {
    let dir = content_tree();
    let repo = FsContentRepository::new(dir.path());

    let err = repo.fetch("home", "broken").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    // The JSON parse error never leaks into the message.
    assert_eq!(err.to_string(), "Content not found: home/broken");
}

#[tokio::test]
async fn typed_hero_loads_through_store() {
    let dir = content_tree();
    let store = ContentStore::new(Arc::new(FsContentRepository::new(dir.path())));

    let hero = store.load_hero().await.unwrap();
    assert_eq!(hero.title, "Build Better Web Experiences");
    assert_eq!(hero.cta_secondary.href, "/docs");
}
