//! Catalog client: the search endpoint contract and its iTunes implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Error, Result};

use super::track::TrackPage;

/// One page fetch against the remote catalog.
///
/// The search session talks to the catalog only through this trait, so
/// tests can script responses without a network.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_page(&self, query: &str, offset: u32, limit: u32) -> Result<TrackPage>;
}

const SEARCH_URL: &str = "https://itunes.apple.com/search";

/// Statuses the search endpoint uses for legitimately empty bodies.
const EMPTY_RESPONSE_CODES: [u16; 4] = [200, 204, 205, 403];

/// Catalog client backed by the iTunes Search API.
#[derive(Clone)]
pub struct ItunesCatalog {
    http: Client,
    base_url: String,
}

impl ItunesCatalog {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SEARCH_URL)
    }

    /// Create a client against a different endpoint (test servers).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("tunepreview/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request_url(&self, query: &str, offset: u32, limit: u32) -> String {
        // The endpoint expects spaces in the term replaced with underscores.
        let term = query.replace(' ', "_");
        format!(
            "{}?term={}&limit={}&offset={}",
            self.base_url, term, limit, offset
        )
    }
}

#[async_trait]
impl CatalogClient for ItunesCatalog {
    async fn fetch_page(&self, query: &str, offset: u32, limit: u32) -> Result<TrackPage> {
        let url = self.request_url(query, offset, limit);
        tracing::debug!(url = %url, "fetching catalog page");

        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        if body.is_empty() {
            // Some statuses legitimately carry no body; everything else is a failure.
            if EMPTY_RESPONSE_CODES.contains(&status) {
                tracing::debug!(status, "empty body treated as empty page");
                return Ok(TrackPage::default());
            }
            return Err(Error::Transport(format!("status {status} with empty body")));
        }

        if !(200..300).contains(&status) {
            return Err(Error::Transport(format!("unexpected status {status}")));
        }

        let page: TrackPage = serde_json::from_slice(&body)?;
        tracing::debug!(status, results = page.results.len(), "catalog page decoded");
        Ok(page)
    }
}
