//! Backdrop rotation state machine
//!
//! Pure state: no timers live here. The async driver (or a test) calls
//! `tick`/`on_ended` and renders whatever `current_video` says. Two modes:
//!
//! - **List mode:** rotate through an ordered playlist; the index advances
//!   on each tick and on each natural end-of-media, wrapping modulo the
//!   list length. An empty list idles.
//! - **Single mode:** one fixed video id; ticks never touch the index and
//!   instead ask the player to seek back to the start. Natural ends are
//!   the player's problem (it loops).
//!
//! Malformed configuration never fails: a background decoration must not
//! break the page, so bad intervals fall back to the default and empty
//! lists simply select nothing.

use crate::video::Video;
use std::time::Duration;

/// Default rotation interval in seconds
pub const DEFAULT_INTERVAL_SECS: f64 = 15.0;

/// What the rotator was given to rotate over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationSource {
    /// One fixed video id, restarted on an interval
    Single { id: String },
    /// Ordered playlist, rotated on an interval
    Playlist(Vec<Video>),
}

/// Outcome of a tick or ended transition, for the caller to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEffect {
    /// List mode advanced to this index
    Advanced(usize),
    /// Single mode: ask the player to seek back to the start
    Restart,
    /// Nothing to do (empty playlist, or ended in single mode)
    Idle,
}

/// Parameters handed to the playback collaborator for the current video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackParams {
    pub url: String,
    /// Player-level looping: only meaningful in single mode. In list mode
    /// the rotator does the looping, so the player must not.
    pub looping: bool,
    pub muted: bool,
}

/// Rotation state machine
#[derive(Debug, Clone)]
pub struct Rotator {
    source: RotationSource,
    current_index: usize,
    interval: Duration,
}

impl Rotator {
    /// Build from a source and an optional interval in seconds.
    ///
    /// Non-positive, non-finite, or missing intervals fall back to
    /// `DEFAULT_INTERVAL_SECS`.
    pub fn new(source: RotationSource, interval_secs: Option<f64>) -> Self {
        let secs = match interval_secs {
            Some(secs) if secs.is_finite() && secs > 0.0 => secs,
            _ => DEFAULT_INTERVAL_SECS,
        };
        Self {
            source,
            current_index: 0,
            interval: Duration::from_secs_f64(secs),
        }
    }

    /// Build from the caller-facing parameter pair.
    ///
    /// A supplied playlist always wins over a single id; an id alone means
    /// single mode; neither means an empty playlist (nothing selected).
    pub fn from_parts(
        videos: Option<Vec<Video>>,
        video_id: Option<String>,
        interval_secs: Option<f64>,
    ) -> Self {
        let source = match (videos, video_id) {
            (Some(videos), _) => RotationSource::Playlist(videos),
            (None, Some(id)) => RotationSource::Single { id },
            (None, None) => RotationSource::Playlist(Vec::new()),
        };
        Self::new(source, interval_secs)
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Currently selected video, if any.
    pub fn current_video(&self) -> Option<Video> {
        match &self.source {
            RotationSource::Single { id } => Some(Video::from_id(id)),
            RotationSource::Playlist(videos) => videos.get(self.current_index).cloned(),
        }
    }

    /// Playback parameters for the current selection, if any.
    ///
    /// `loop_single` is the caller's loop preference; it only takes effect
    /// in single mode, since list rotation replaces player-level looping.
    pub fn playback_params(&self, muted: bool, loop_single: bool) -> Option<PlaybackParams> {
        let video = self.current_video()?;
        let looping = matches!(self.source, RotationSource::Single { .. }) && loop_single;
        Some(PlaybackParams {
            url: video.url,
            looping,
            muted,
        })
    }

    /// One elapsed rotation interval.
    pub fn tick(&mut self) -> TickEffect {
        match &self.source {
            RotationSource::Single { .. } => TickEffect::Restart,
            RotationSource::Playlist(videos) => self.advance(videos.len()),
        }
    }

    /// The player reported the current video finished naturally.
    ///
    /// List mode advances exactly like a tick, so rotation is "timer or
    /// natural end, whichever comes first". Single mode ignores it: the
    /// player loops on its own there.
    pub fn on_ended(&mut self) -> TickEffect {
        match &self.source {
            RotationSource::Single { .. } => TickEffect::Idle,
            RotationSource::Playlist(videos) => self.advance(videos.len()),
        }
    }

    fn advance(&mut self, len: usize) -> TickEffect {
        if len == 0 {
            return TickEffect::Idle;
        }
        self.current_index = (self.current_index + 1) % len;
        TickEffect::Advanced(self.current_index)
    }
}
