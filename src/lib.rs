//! Core engines for a remote-catalog music preview player.
//!
//! Two stateful engines do the real work:
//!
//! - [`SearchSession`]: issues offset-paginated queries against a remote
//!   music catalog, merges pages into a deduplicated result list, and rolls
//!   its pagination cursor back when a page fails.
//! - [`PlaybackSession`]: owns a single audio resource handle, drives it
//!   through its load/ready/play/pause/seek lifecycle, and polls the
//!   playback position on a fixed cadence.
//!
//! The presentation layer is an external collaborator: it forwards user
//! intents by calling the engines and renders the snapshots the engines
//! push through the [`model::SearchObserver`] and [`model::PlaybackObserver`]
//! traits. No layout or rendering concerns live in this crate.

pub mod controller;
pub mod error;
pub mod logging;
pub mod model;

pub use controller::{PlaybackSession, SearchSession};
pub use error::{Error, Result};
pub use model::{
    AudioResource, AudioResourceFactory, CatalogClient, ItunesCatalog, PlaybackLifecycle,
    PlaybackMetadata, PlaybackObserver, PlaybackPosition, SearchObserver, SearchSnapshot, Track,
    TrackKind, TrackPage,
};
