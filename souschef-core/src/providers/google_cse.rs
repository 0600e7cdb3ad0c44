//! Google Programmable Search (CSE) web search provider.
//!
//! Calls the JSON API directly; result pages are never fetched or parsed.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{ProviderError, WebSearchProvider};
use crate::types::SearchHit;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
const USER_AGENT: &str = "SouschefBot/0.1 (+https://example.com/contact)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

#[derive(Debug)]
pub struct GoogleCse {
    api_key: String,
    engine_id: String,
    client: reqwest::Client,
}

impl GoogleCse {
    /// Build a client for the given credentials. Blank credentials are a
    /// configuration error, not an empty result set.
    pub fn new(api_key: &str, engine_id: &str) -> Result<Self, ProviderError> {
        if api_key.is_empty() || engine_id.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Google API key or engine id not set (GOOGLE_API_KEY / GOOGLE_CSE_ID)".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;
        Ok(Self {
            api_key: api_key.to_string(),
            engine_id: engine_id.to_string(),
            client,
        })
    }

    /// Build from `GOOGLE_API_KEY` / `GOOGLE_CSE_ID`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_default();
        let engine_id = std::env::var("GOOGLE_CSE_ID").unwrap_or_default();
        Self::new(&api_key, &engine_id)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default = "untitled")]
    title: String,
    link: Option<String>,
    #[serde(default)]
    snippet: String,
}

fn untitled() -> String {
    "Untitled Recipe".to_string()
}

#[async_trait]
impl WebSearchProvider for GoogleCse {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchHit>, ProviderError> {
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", &format!("{query} recipe")),
                ("num", &count.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(parsed
            .items
            .into_iter()
            .map(|item| SearchHit {
                title: item.title,
                link: item.link,
                snippet: item.snippet,
            })
            .collect())
    }

    fn provider_name(&self) -> &'static str {
        "google_cse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_are_not_configured() {
        assert!(matches!(
            GoogleCse::new("", ""),
            Err(ProviderError::NotConfigured(_))
        ));
        assert!(matches!(
            GoogleCse::new("key", ""),
            Err(ProviderError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_valid_credentials_build() {
        let provider = GoogleCse::new("key", "cx").unwrap();
        assert_eq!(provider.provider_name(), "google_cse");
    }
}
