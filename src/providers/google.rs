//! Google Custom Search provider
//!
//! Uses the Custom Search JSON API. Requires both an API key and a search
//! engine id; without them the provider reports itself unavailable.

use super::traits::Provider;
use crate::network::HttpClient;
use crate::results::{ProviderOutcome, SearchError, SearchResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

const SOURCE_LABEL: &str = "Google Search";

/// The API returns at most 10 results per request
const MAX_API_RESULTS: usize = 10;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    items: Vec<ApiItem>,
}

#[derive(Debug, Deserialize)]
struct ApiItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Google Custom Search provider
pub struct Google {
    api_key: Option<String>,
    engine_id: Option<String>,
    base_url: String,
    client: HttpClient,
}

impl Google {
    pub fn new(client: HttpClient, api_key: Option<String>, engine_id: Option<String>) -> Self {
        Self {
            api_key,
            engine_id,
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            client,
        }
    }

    /// Point the provider at a different endpoint (used by HTTP tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn fetch(&self, query: &str, num_results: usize) -> Result<Vec<SearchResult>, SearchError> {
        let (api_key, engine_id) = match (&self.api_key, &self.engine_id) {
            (Some(key), Some(id)) => (key, id),
            _ => {
                return Err(SearchError::NotConfigured(
                    "Google API key or Search Engine ID".to_string(),
                ))
            }
        };

        let mut params = HashMap::new();
        params.insert("key".to_string(), api_key.clone());
        params.insert("cx".to_string(), engine_id.clone());
        params.insert("q".to_string(), query.to_string());
        params.insert(
            "num".to_string(),
            num_results.min(MAX_API_RESULTS).to_string(),
        );

        let response = self.client.get(&self.base_url, &params).await?;
        if !response.is_success() {
            return Err(SearchError::Upstream(format!(
                "HTTP error: {}",
                response.status
            )));
        }

        let parsed: ApiResponse = serde_json::from_str(&response.text)
            .map_err(|e| SearchError::Upstream(format!("failed to parse JSON: {}", e)))?;

        let results = parsed
            .items
            .into_iter()
            .map(|item| SearchResult::new(item.title, item.link, item.snippet, SOURCE_LABEL))
            .collect();

        Ok(results)
    }
}

#[async_trait]
impl Provider for Google {
    fn name(&self) -> &str {
        "Google"
    }

    fn min_interval(&self) -> Duration {
        Duration::from_millis(100)
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some() && self.engine_id.is_some()
    }

    async fn search(&self, query: &str, num_results: usize) -> ProviderOutcome {
        let deadline = Duration::from_secs(crate::DEFAULT_TIMEOUT);
        match timeout(deadline, self.fetch(query, num_results)).await {
            Ok(Ok(results)) => {
                debug!("Google returned {} results", results.len());
                ProviderOutcome::from_results(self.name(), query, results)
            }
            Ok(Err(err)) => ProviderOutcome::failure(self.name(), query, &err),
            Err(_) => ProviderOutcome::failure(
                self.name(),
                query,
                &SearchError::Timeout(crate::DEFAULT_TIMEOUT),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::OutcomeStatus;

    fn client() -> HttpClient {
        HttpClient::new().unwrap()
    }

    #[test]
    fn test_availability_requires_both_credentials() {
        let neither = Google::new(client(), None, None);
        let key_only = Google::new(client(), Some("key".into()), None);
        let both = Google::new(client(), Some("key".into()), Some("cx".into()));

        assert!(!neither.is_available());
        assert!(!key_only.is_available());
        assert!(both.is_available());
    }

    #[tokio::test]
    async fn test_search_without_credentials_reports_not_configured() {
        let google = Google::new(client(), None, None);
        let outcome = google.search("rust", 5).await;

        assert_eq!(outcome.status, OutcomeStatus::Error);
        assert!(outcome.error.unwrap().contains("not configured"));
    }
}
