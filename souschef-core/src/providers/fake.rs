//! Fake providers for tests: deterministic results, no network.

use async_trait::async_trait;

use super::{PlacesProvider, ProviderError, WebSearchProvider};
use crate::types::{SearchHit, Venue};

/// A web search provider returning canned hits, or a forced failure.
#[derive(Debug, Default)]
pub struct FakeSearch {
    hits: Vec<SearchHit>,
    fail_with: Option<String>,
}

impl FakeSearch {
    /// Returns the given hits (truncated to the requested count).
    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            fail_with: None,
        }
    }

    /// Fails every search with a transport error.
    pub fn failing(message: &str) -> Self {
        Self {
            hits: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl WebSearchProvider for FakeSearch {
    async fn search(&self, _query: &str, count: usize) -> Result<Vec<SearchHit>, ProviderError> {
        if let Some(message) = &self.fail_with {
            return Err(ProviderError::Request(message.clone()));
        }
        Ok(self.hits.iter().take(count).cloned().collect())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// A places provider that always fails, for exercising degrade paths.
#[derive(Debug, Default)]
pub struct FailingPlaces;

#[async_trait]
impl PlacesProvider for FailingPlaces {
    async fn nearby_search(
        &self,
        _cuisine: &str,
        _lat: f64,
        _lng: f64,
    ) -> Result<Vec<Venue>, ProviderError> {
        Err(ProviderError::Request("places backend unreachable".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}
