//! Built-in backdrop rotation catalog
//!
//! The default playlist shipped with the landing page. Callers can supply
//! their own list; this one backs the `/backdrop/playlist` endpoint and
//! the default rotation.

use crate::video::{watch_url, Video};

/// The shipped background rotation list, in rotation order.
pub fn background_videos() -> Vec<Video> {
    [
        ("In7e1knX7rQ", "ETA/MTLA (feat. E SENS 이센스)", "NJZ"),
        ("WpqXjRrZqa0", "Cool with You (2025)", "NJZ"),
        ("YYyskjq1vSc", "New Jeans (2025)", "NJZ"),
        ("hgNJ_qy6LCw", "ASAP", "NJZ"),
        ("ZncbtRo7RXs", "Supernatural (Part.1)", "NewJeans (뉴진스)"),
        ("FonjL7DQAUQ", "海浪 (Waves)", "deca joins"),
        ("Rk6aQvlmsWo", "Dandelion", "grentperez & Ruel"),
        ("DskqpUrvlmw", "GPT", "STAYC (스테이씨)"),
        ("osNYssIep5w", "Mantra (House Remix)", "JENNIE"),
        ("PICpEtPHyZI", "Damn Right", "JENNIE, Childish Gambino, Kali Uchis"),
        ("kxUA2wwYiME", "The Chase", "Hearts2Hearts (하츠투하츠)"),
        ("hJ9Wp3PO3c8", "Butterfly", "Hearts2Hearts (하츠투하츠)"),
        ("aFrQIJ5cbRc", "Know About Me", "NMIXX"),
        ("z-xfGoabprU", "BEBE", "STAYC (스테이씨)"),
    ]
    .into_iter()
    .map(|(id, title, artist)| Video {
        id: id.to_string(),
        url: watch_url(id),
        title: title.to_string(),
        artist: artist.to_string(),
    })
    .collect()
}
