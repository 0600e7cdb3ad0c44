//! External provider abstraction.
//!
//! The core never talks to third-party services directly; it goes through
//! these capability traits so tests can substitute fakes and deployments can
//! swap implementations.

mod fake;
mod google_cse;
mod mock_vision;
mod static_places;

pub use fake::{FailingPlaces, FakeSearch};
pub use google_cse::GoogleCse;
pub use mock_vision::MockClassifier;
pub use static_places::StaticPlaces;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Recognition, SearchHit, Venue};

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Capability: turn an image (or a debugging hint) into an ingredient list.
///
/// Implementations should be stateless and thread-safe.
#[async_trait]
pub trait ImageClassifier: Send + Sync + fmt::Debug {
    /// Classify ingredients visible in the given image bytes.
    async fn classify_image(&self, image: &[u8]) -> Result<Recognition, ProviderError>;

    /// Classify from a free-text hint instead of an image.
    async fn classify_hint(&self, hint: &str) -> Result<Recognition, ProviderError>;

    fn provider_name(&self) -> &'static str;
}

/// Capability: find restaurants serving a cuisine near a coordinate.
#[async_trait]
pub trait PlacesProvider: Send + Sync + fmt::Debug {
    async fn nearby_search(
        &self,
        cuisine: &str,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<Venue>, ProviderError>;

    fn provider_name(&self) -> &'static str;
}

/// Capability: run a web search and return title/link/snippet hits.
#[async_trait]
pub trait WebSearchProvider: Send + Sync + fmt::Debug {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchHit>, ProviderError>;

    fn provider_name(&self) -> &'static str;
}
