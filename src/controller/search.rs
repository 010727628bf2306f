//! Search session: paginated, deduplicating catalog queries

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::model::{CatalogClient, SearchObserver, SearchSnapshot, Track, TrackPage};

/// Number of results requested per page; the offset advances by this much.
pub const PAGE_SIZE: u32 = 25;

/// Query issued when the session starts or resets.
pub const DEFAULT_QUERY: &str = "hello";

struct SearchState {
    query_text: String,
    page_offset: u32,
    accumulated: Vec<Track>,
    generation: u64,
}

impl SearchState {
    fn restart(&mut self, query: &str) {
        self.accumulated.clear();
        self.page_offset = 0;
        self.query_text = query.to_string();
        self.generation += 1;
    }
}

/// Paginated search session against the remote catalog.
///
/// Owns the pagination cursor and the accumulated, deduplicated result
/// list. Every entry point returns immediately: the fetch runs on a
/// spawned task that re-validates the session generation before applying
/// its result, so a slow response from a superseded query can never
/// overwrite newer state.
///
/// Overlapping `load_more` calls are not serialized here; callers issue
/// the next one only after the previous fetch reported completion.
#[derive(Clone)]
pub struct SearchSession {
    state: Arc<Mutex<SearchState>>,
    catalog: Arc<dyn CatalogClient>,
    observer: Arc<dyn SearchObserver>,
}

impl SearchSession {
    pub fn new(catalog: Arc<dyn CatalogClient>, observer: Arc<dyn SearchObserver>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SearchState {
                query_text: DEFAULT_QUERY.to_string(),
                page_offset: 0,
                accumulated: Vec::new(),
                generation: 0,
            })),
            catalog,
            observer,
        }
    }

    /// Issue the default query from a fresh cursor.
    pub async fn start(&self) {
        let (generation, query, offset) = {
            let state = self.state.lock().await;
            (state.generation, state.query_text.clone(), state.page_offset)
        };
        tracing::debug!(query = %query, "starting search session");
        self.fetch(generation, query, offset, false);
    }

    /// Begin a new search, discarding all accumulated results.
    ///
    /// The caller enforces query validity; the UI rejects empty text and
    /// queries shorter than three characters before they reach here.
    pub async fn search(&self, text: &str) {
        let (generation, query) = {
            let mut state = self.state.lock().await;
            state.restart(text);
            (state.generation, state.query_text.clone())
        };
        tracing::debug!(query = %query, generation, "new search");
        self.fetch(generation, query, 0, false);
    }

    /// Fetch the next page of the current query.
    ///
    /// The cursor advances before the fetch and rolls back if the fetch
    /// fails, so a retry re-requests the same page instead of skipping it.
    pub async fn load_more(&self) {
        let (generation, query, offset) = {
            let mut state = self.state.lock().await;
            state.page_offset += PAGE_SIZE;
            (state.generation, state.query_text.clone(), state.page_offset)
        };
        tracing::debug!(offset, "loading next page");
        self.fetch(generation, query, offset, true);
    }

    /// Clear all results and return to the default query.
    pub async fn reset(&self) {
        let generation = {
            let mut state = self.state.lock().await;
            state.restart(DEFAULT_QUERY);
            state.generation
        };
        tracing::debug!(generation, "session reset");
        self.fetch(generation, DEFAULT_QUERY.to_string(), 0, false);
    }

    /// Current accumulated results, in arrival order.
    pub async fn tracks(&self) -> Vec<Track> {
        self.state.lock().await.accumulated.clone()
    }

    pub async fn page_offset(&self) -> u32 {
        self.state.lock().await.page_offset
    }

    pub async fn query_text(&self) -> String {
        self.state.lock().await.query_text.clone()
    }

    fn fetch(&self, generation: u64, query: String, offset: u32, advanced: bool) {
        self.observer.search_loading(true);

        let session = self.clone();
        tokio::spawn(async move {
            let result = session.catalog.fetch_page(&query, offset, PAGE_SIZE).await;
            session.apply(generation, offset, advanced, result).await;
        });
    }

    async fn apply(
        &self,
        generation: u64,
        offset: u32,
        advanced: bool,
        result: Result<TrackPage>,
    ) {
        let mut state = self.state.lock().await;

        if state.generation != generation {
            tracing::debug!(
                generation,
                current = state.generation,
                "discarding stale page response"
            );
            return;
        }

        match result {
            Ok(page) => {
                let before = state.accumulated.len();
                for track in page.results.into_iter().filter(|t| t.is_song()) {
                    if !state.accumulated.contains(&track) {
                        state.accumulated.push(track);
                    }
                }
                tracing::debug!(
                    offset,
                    added = state.accumulated.len() - before,
                    total = state.accumulated.len(),
                    "page merged"
                );

                let snapshot = SearchSnapshot {
                    tracks: state.accumulated.clone(),
                };
                drop(state);

                self.observer.search_results(snapshot);
                self.observer.search_loading(false);
            }
            Err(e) => {
                // Undo the optimistic advance so a retry re-fetches this page.
                if advanced && state.page_offset >= PAGE_SIZE {
                    state.page_offset -= PAGE_SIZE;
                }
                tracing::warn!(offset, error = %e, "catalog page fetch failed");
                drop(state);

                self.observer.search_loading(false);
            }
        }
    }
}
