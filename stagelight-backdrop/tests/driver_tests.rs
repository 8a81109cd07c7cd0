//! Rotation driver tests under paused tokio time
//!
//! Timer behavior is driven deterministically with `time::advance`; after
//! each advance the driver task gets scheduler turns to process the tick.

use stagelight_backdrop::{PlayerControl, RotationSource, Rotator, RotatorDriver, Video};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

struct CountingPlayer {
    seeks: AtomicUsize,
}

impl CountingPlayer {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            seeks: AtomicUsize::new(0),
        })
    }

    fn seek_count(&self) -> usize {
        self.seeks.load(Ordering::SeqCst)
    }
}

impl PlayerControl for CountingPlayer {
    fn seek_to_start(&self) {
        self.seeks.fetch_add(1, Ordering::SeqCst);
    }
}

fn playlist(n: usize) -> Vec<Video> {
    (0..n)
        .map(|i| Video {
            id: format!("vid{}", i),
            url: format!("https://www.youtube.com/watch?v=vid{}", i),
            title: format!("Video {}", i),
            artist: "Test".to_string(),
        })
        .collect()
}

/// Give the driver task scheduler turns to react to advanced time or
/// channel signals.
async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn list_mode_advances_on_each_interval() {
    let player = CountingPlayer::new();
    let rotator = Rotator::new(RotationSource::Playlist(playlist(3)), Some(15.0));
    let handle = RotatorDriver::spawn(rotator, player.clone());

    assert_eq!(handle.current_index(), 0);

    tokio::time::advance(Duration::from_secs(15)).await;
    settle().await;
    assert_eq!(handle.current_index(), 1);
    assert_eq!(handle.current_video().unwrap().id, "vid1");

    tokio::time::advance(Duration::from_secs(15)).await;
    settle().await;
    assert_eq!(handle.current_index(), 2);

    // Third tick wraps back to the start.
    tokio::time::advance(Duration::from_secs(15)).await;
    settle().await;
    assert_eq!(handle.current_index(), 0);

    // List mode never asks the player to restart.
    assert_eq!(player.seek_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn first_tick_lands_exactly_one_interval_after_spawn() {
    let player = CountingPlayer::new();
    let rotator = Rotator::new(RotationSource::Playlist(playlist(3)), Some(15.0));
    let handle = RotatorDriver::spawn(rotator, player);
    settle().await;

    tokio::time::advance(Duration::from_secs(14)).await;
    settle().await;
    assert_eq!(handle.current_index(), 0);

    // The interval is measured from spawn, so one more second completes
    // it even though the task started after spawn returned.
    tokio::time::advance(Duration::from_secs(1)).await;
    settle().await;
    assert_eq!(handle.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn single_mode_restarts_once_per_interval() {
    let player = CountingPlayer::new();
    let rotator = Rotator::new(
        RotationSource::Single {
            id: "abc123".to_string(),
        },
        Some(15.0),
    );
    let handle = RotatorDriver::spawn(rotator, player.clone());

    for expected in 1..=3 {
        tokio::time::advance(Duration::from_secs(15)).await;
        settle().await;
        assert_eq!(player.seek_count(), expected);
        assert_eq!(handle.current_index(), 0);
    }
}

#[tokio::test(start_paused = true)]
async fn ended_signal_advances_without_waiting_for_the_timer() {
    let player = CountingPlayer::new();
    let rotator = Rotator::new(RotationSource::Playlist(playlist(3)), Some(15.0));
    let handle = RotatorDriver::spawn(rotator, player);

    handle.notify_ended();
    settle().await;
    assert_eq!(handle.current_index(), 1);

    // The timer still fires on its own schedule afterwards.
    tokio::time::advance(Duration::from_secs(15)).await;
    settle().await;
    assert_eq!(handle.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn empty_playlist_never_panics() {
    let player = CountingPlayer::new();
    let rotator = Rotator::new(RotationSource::Playlist(Vec::new()), Some(15.0));
    let handle = RotatorDriver::spawn(rotator, player.clone());

    handle.notify_ended();
    tokio::time::advance(Duration::from_secs(60)).await;
    settle().await;

    assert_eq!(handle.current_video(), None);
    assert_eq!(handle.current_index(), 0);
    assert_eq!(player.seek_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_ticking() {
    let player = CountingPlayer::new();
    let rotator = Rotator::new(
        RotationSource::Single {
            id: "abc123".to_string(),
        },
        Some(15.0),
    );
    let handle = RotatorDriver::spawn(rotator, player.clone());

    tokio::time::advance(Duration::from_secs(15)).await;
    settle().await;
    assert_eq!(player.seek_count(), 1);

    handle.shutdown();
    settle().await;

    tokio::time::advance(Duration::from_secs(150)).await;
    settle().await;
    assert_eq!(player.seek_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_ticking() {
    let player = CountingPlayer::new();
    let rotator = Rotator::new(
        RotationSource::Single {
            id: "abc123".to_string(),
        },
        Some(15.0),
    );
    let handle = RotatorDriver::spawn(rotator, player.clone());

    drop(handle);
    settle().await;

    tokio::time::advance(Duration::from_secs(150)).await;
    settle().await;
    assert_eq!(player.seek_count(), 0);
}
