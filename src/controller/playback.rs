//! Playback session: audio resource lifecycle and position polling

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::model::{
    AudioResource, AudioResourceFactory, PlaybackLifecycle, PlaybackMetadata, PlaybackObserver,
    PlaybackPosition,
};

/// Cadence of the position polling loop.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Volume applied until the user moves the slider.
pub const DEFAULT_VOLUME: f32 = 0.5;

struct PlaybackState {
    lifecycle: PlaybackLifecycle,
    resource: Option<Box<dyn AudioResource>>,
    duration: f32,
    volume: f32,
    generation: u64,
}

impl PlaybackState {
    /// Close and drop the current resource, returning to Idle.
    ///
    /// Bumping the generation here is what stops the polling loop and
    /// invalidates any open still in flight; both re-check it before
    /// touching state.
    fn teardown(&mut self) {
        if let Some(mut resource) = self.resource.take() {
            resource.close();
        }
        self.generation += 1;
        self.lifecycle = PlaybackLifecycle::Idle;
        self.duration = 0.0;
    }
}

/// Playback session for track previews.
///
/// Owns at most one audio resource at a time and the single polling task
/// that reports its position. `load` tears the previous resource down
/// before opening the next, so rapid successive loads leave exactly one
/// live resource and one active poller. Volume persists across loads
/// within one session instance.
#[derive(Clone)]
pub struct PlaybackSession {
    state: Arc<Mutex<PlaybackState>>,
    factory: Arc<dyn AudioResourceFactory>,
    observer: Arc<dyn PlaybackObserver>,
}

impl PlaybackSession {
    pub fn new(
        factory: Arc<dyn AudioResourceFactory>,
        observer: Arc<dyn PlaybackObserver>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(PlaybackState {
                lifecycle: PlaybackLifecycle::Idle,
                resource: None,
                duration: 0.0,
                volume: DEFAULT_VOLUME,
                generation: 0,
            })),
            factory,
            observer,
        }
    }

    /// Load a preview asset, replacing whatever was loaded before.
    ///
    /// Pushes the display metadata and a loading indicator immediately,
    /// then opens the resource on a spawned task. Returns without waiting
    /// for the open to complete.
    pub async fn load(&self, preview_url: &str, metadata: PlaybackMetadata) {
        let generation = {
            let mut state = self.state.lock().await;
            state.teardown();
            state.lifecycle = PlaybackLifecycle::Loading;
            state.generation
        };
        tracing::debug!(url = %preview_url, generation, "loading preview");

        self.observer.playback_display(metadata);
        self.observer.playback_loading(true);

        let session = self.clone();
        let url = preview_url.to_string();
        tokio::spawn(async move {
            let result = session.factory.open(&url).await;
            session.finish_load(generation, result).await;
        });
    }

    /// Start or resume playback. Ignored unless a resource is ready or paused.
    pub async fn play(&self) {
        let mut state = self.state.lock().await;
        if !state.lifecycle.can_play() {
            tracing::debug!(lifecycle = ?state.lifecycle, "ignoring play");
            return;
        }
        if let Some(resource) = state.resource.as_mut() {
            resource.play();
            state.lifecycle = PlaybackLifecycle::Playing;
        }
    }

    /// Pause playback. Ignored unless currently playing.
    pub async fn pause(&self) {
        let mut state = self.state.lock().await;
        if state.lifecycle != PlaybackLifecycle::Playing {
            tracing::debug!(lifecycle = ?state.lifecycle, "ignoring pause");
            return;
        }
        if let Some(resource) = state.resource.as_mut() {
            resource.pause();
            state.lifecycle = PlaybackLifecycle::Paused;
        }
    }

    /// Set the volume, applied immediately to the live resource and kept
    /// for every subsequent load.
    pub async fn set_volume(&self, level: f32) {
        let level = level.clamp(0.0, 1.0);
        let mut state = self.state.lock().await;
        state.volume = level;
        if let Some(resource) = state.resource.as_mut() {
            resource.set_volume(level);
        }
    }

    /// Seek to an absolute position, clamped to the track duration.
    ///
    /// The reported position catches up on the next poll tick.
    pub async fn seek(&self, seconds: f32) {
        let mut state = self.state.lock().await;
        let duration = state.duration;
        if let Some(resource) = state.resource.as_mut() {
            resource.seek(seconds.clamp(0.0, duration));
        }
    }

    /// Called when the consuming view goes off screen; previews must not
    /// keep playing in the background.
    pub async fn on_background(&self) {
        self.pause().await;
    }

    /// Tear down the resource and polling loop, returning to Idle.
    pub async fn shutdown(&self) {
        let mut state = self.state.lock().await;
        state.teardown();
        tracing::debug!("playback session shut down");
    }

    pub async fn lifecycle(&self) -> PlaybackLifecycle {
        self.state.lock().await.lifecycle
    }

    pub async fn volume(&self) -> f32 {
        self.state.lock().await.volume
    }

    pub async fn duration(&self) -> f32 {
        self.state.lock().await.duration
    }

    async fn finish_load(&self, generation: u64, result: Result<Box<dyn AudioResource>>) {
        let mut state = self.state.lock().await;

        if state.generation != generation {
            tracing::debug!(
                generation,
                current = state.generation,
                "discarding superseded load"
            );
            if let Ok(mut resource) = result {
                resource.close();
            }
            return;
        }

        match result {
            Ok(mut resource) => {
                resource.set_volume(state.volume);
                state.duration = resource.duration();
                state.resource = Some(resource);
                state.lifecycle = PlaybackLifecycle::Ready;
                let duration = state.duration;
                drop(state);

                tracing::debug!(duration, "resource ready");
                self.observer.playback_loading(false);
                self.spawn_poller(generation);
            }
            Err(e) => {
                state.lifecycle = PlaybackLifecycle::Failed;
                drop(state);

                tracing::warn!(error = %e, "preview failed to open");
                self.observer.playback_loading(false);
            }
        }
    }

    /// Start the position polling loop for the resource opened under
    /// `generation`. One poller per resource: the loop exits as soon as
    /// the generation moves on, before touching the replacement.
    fn spawn_poller(&self, generation: u64) {
        let session = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            loop {
                ticker.tick().await;

                let state = session.state.lock().await;
                if state.generation != generation {
                    break;
                }
                let Some(resource) = state.resource.as_ref() else {
                    break;
                };

                let position = resource.position().clamp(0.0, state.duration);
                let report = PlaybackPosition::new(position, state.duration);
                drop(state);

                session.observer.playback_position(report);
            }
            tracing::debug!(generation, "position poller stopped");
        });
    }
}
