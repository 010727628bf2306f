//! Core type definitions shared by the session engines and their observers

use super::track::Track;

/// Lifecycle of the playback session's audio resource.
///
/// Per load the progression is Idle, then Loading, then either Ready or
/// Failed. Ready, Playing and Paused convert freely among themselves.
/// Explicit teardown returns any state to Idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackLifecycle {
    #[default]
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Failed,
}

impl PlaybackLifecycle {
    /// States from which a play command is valid.
    pub fn can_play(self) -> bool {
        matches!(self, Self::Ready | Self::Paused)
    }

    /// States in which a live audio resource exists.
    pub fn has_resource(self) -> bool {
        matches!(self, Self::Ready | Self::Playing | Self::Paused)
    }
}

/// Metadata shown while a track loads and plays.
///
/// Pushed to the observer immediately on `load` so the display can update
/// before the audio resource is ready.
#[derive(Clone, Debug, Default)]
pub struct PlaybackMetadata {
    pub artist: String,
    pub title: Option<String>,
    pub artwork_url: Option<String>,
}

impl PlaybackMetadata {
    pub fn from_track(track: &Track) -> Self {
        Self {
            artist: track.artist_name.clone(),
            title: track.track_name.clone(),
            artwork_url: track.artwork_url.clone(),
        }
    }
}

/// Snapshot of the full accumulated search result list.
#[derive(Clone, Debug, Default)]
pub struct SearchSnapshot {
    pub tracks: Vec<Track>,
}

/// Position report pushed on every poll tick.
#[derive(Clone, Debug)]
pub struct PlaybackPosition {
    /// Raw position in seconds, for the seek control's value.
    pub current: f32,
    /// Total duration in seconds, known once the resource is ready.
    pub duration: f32,
    /// Whole-second rendering for the time label.
    pub display: String,
}

impl PlaybackPosition {
    pub fn new(current: f32, duration: f32) -> Self {
        Self {
            current,
            duration,
            display: format_seconds(current),
        }
    }
}

/// Format a position in seconds as `M:SS`, dropping fractional seconds.
pub fn format_seconds(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Receives state snapshots pushed by the search session.
pub trait SearchObserver: Send + Sync {
    fn search_results(&self, snapshot: SearchSnapshot);
    fn search_loading(&self, is_loading: bool);
}

/// Receives state snapshots pushed by the playback session.
pub trait PlaybackObserver: Send + Sync {
    fn playback_display(&self, metadata: PlaybackMetadata);
    fn playback_loading(&self, is_loading: bool);
    fn playback_position(&self, position: PlaybackPosition);
}
