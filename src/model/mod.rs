//! Model module - Data types and external collaborator contracts
//!
//! This module contains the data structures the engines operate on and the
//! traits through which they reach the outside world. It is organized into
//! submodules by responsibility:
//!
//! - `track`: catalog track records and page payloads
//! - `types`: lifecycle enum, snapshots, observer traits
//! - `catalog`: search endpoint contract and its iTunes implementation
//! - `audio`: audio resource and resource factory contracts

mod audio;
mod catalog;
mod track;
mod types;

// Re-export all public types for convenient access
pub use track::{Track, TrackKind, TrackPage};

pub use types::{
    PlaybackLifecycle, PlaybackMetadata, PlaybackPosition, PlaybackObserver, SearchObserver,
    SearchSnapshot, format_seconds,
};

pub use catalog::{CatalogClient, ItunesCatalog};

pub use audio::{AudioResource, AudioResourceFactory};
