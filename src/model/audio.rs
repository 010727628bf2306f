//! Audio resource contract consumed by the playback session

use async_trait::async_trait;

use crate::error::Result;

/// Opens preview URLs into playable resources.
///
/// `open` resolves once the resource is ready to play (its duration is
/// known) or fails with [`crate::Error::ResourceOpen`]. The playback
/// session issues at most one open at a time and discards completions
/// superseded by a newer load.
#[async_trait]
pub trait AudioResourceFactory: Send + Sync {
    async fn open(&self, url: &str) -> Result<Box<dyn AudioResource>>;
}

/// A single time-seekable, volume-controllable media handle.
///
/// Exclusively owned by the playback session. `close` is called before the
/// handle is dropped so release never depends on drop timing.
pub trait AudioResource: Send {
    fn play(&mut self);
    fn pause(&mut self);
    /// Seek to an absolute position in seconds. The reported position
    /// catches up on the next poll read, not synchronously.
    fn seek(&mut self, seconds: f32);
    /// Apply a volume level in `[0, 1]`.
    fn set_volume(&mut self, level: f32);
    /// Current playback position in seconds.
    fn position(&self) -> f32;
    /// Total duration in seconds.
    fn duration(&self) -> f32;
    /// Release the underlying media handle.
    fn close(&mut self);
}
