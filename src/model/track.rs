//! Catalog track records and page payloads

use serde::Deserialize;

/// The media kind the catalog reports for a result entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum TrackKind {
    #[serde(rename = "song")]
    Song,
    #[serde(rename = "tv-episode")]
    TvEpisode,
    #[serde(rename = "feature-movie")]
    FeatureMovie,
    #[serde(rename = "music-video")]
    MusicVideo,
    #[serde(rename = "podcast")]
    Podcast,
    /// Any kind string this client does not recognize. Decoding one of
    /// these must not fail the whole page.
    #[serde(other)]
    Unknown,
}

/// A single catalog result.
///
/// Identity is full-value equality: two tracks are the same iff every field
/// matches. That is exactly what search-result deduplication keys on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(default)]
    pub kind: Option<TrackKind>,
    pub artist_name: String,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default)]
    pub track_name: Option<String>,
    /// URL of the playable preview asset, when the catalog has one.
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default, rename = "artworkUrl100")]
    pub artwork_url: Option<String>,
}

impl Track {
    /// Whether this entry is an actual song (search results mix in
    /// episodes, movies and podcasts that the library view drops).
    pub fn is_song(&self) -> bool {
        self.kind == Some(TrackKind::Song)
    }
}

/// One page of search results as returned by the catalog.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPage {
    #[serde(default)]
    pub result_count: i64,
    #[serde(default)]
    pub results: Vec<Track>,
}
