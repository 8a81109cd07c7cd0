//! Video descriptor for the backdrop playlist

use serde::{Deserialize, Serialize};

/// One playable backdrop video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Platform video id (the YouTube id for the shipped catalog)
    pub id: String,
    /// Playable URL handed to the player
    pub url: String,
    /// Display title
    pub title: String,
    /// Display artist
    pub artist: String,
}

impl Video {
    /// Descriptor for a bare video id: canonical watch URL, no metadata.
    /// Used by single-id rotation where only playback matters.
    pub fn from_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            url: watch_url(id),
            title: String::new(),
            artist: String::new(),
        }
    }
}

/// Canonical watch URL for a video id
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("In7e1knX7rQ"),
            "https://www.youtube.com/watch?v=In7e1knX7rQ"
        );
    }

    #[test]
    fn test_serializes_with_plain_field_names() {
        let video = Video::from_id("abc");
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["url"], "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_from_id_has_no_metadata() {
        let video = Video::from_id("abc123");
        assert_eq!(video.id, "abc123");
        assert!(video.title.is_empty());
        assert!(video.artist.is_empty());
    }
}
