//! Controller module - The stateful session engines
//!
//! This module contains the two engines that drive the application: one for
//! catalog search, one for preview playback. It is organized into submodules
//! by responsibility:
//!
//! - `search`: paginated, deduplicating search session
//! - `playback`: audio resource lifecycle and position polling

mod playback;
mod search;

pub use playback::{DEFAULT_VOLUME, POLL_INTERVAL, PlaybackSession};
pub use search::{DEFAULT_QUERY, PAGE_SIZE, SearchSession};
