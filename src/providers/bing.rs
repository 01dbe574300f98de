//! Bing Web Search provider
//!
//! Uses the Web Search v7 API with an `Ocp-Apim-Subscription-Key` header.

use super::traits::Provider;
use crate::network::HttpClient;
use crate::results::{strip_tags, ProviderOutcome, SearchError, SearchResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

const SOURCE_LABEL: &str = "Bing Search";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    web_pages: Option<WebPages>,
}

#[derive(Debug, Deserialize)]
struct WebPages {
    #[serde(default)]
    value: Vec<WebPage>,
}

#[derive(Debug, Deserialize)]
struct WebPage {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    snippet: String,
}

/// Bing Web Search provider
pub struct Bing {
    api_key: Option<String>,
    base_url: String,
    client: HttpClient,
}

impl Bing {
    pub fn new(client: HttpClient, api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: "https://api.bing.microsoft.com/v7.0/search".to_string(),
            client,
        }
    }

    /// Point the provider at a different endpoint (used by HTTP tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn fetch(&self, query: &str, num_results: usize) -> Result<Vec<SearchResult>, SearchError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| SearchError::NotConfigured("Bing API key".to_string()))?;

        let mut headers = HashMap::new();
        headers.insert("Ocp-Apim-Subscription-Key".to_string(), api_key.clone());

        let mut params = HashMap::new();
        params.insert("q".to_string(), query.to_string());
        params.insert("count".to_string(), num_results.to_string());
        params.insert("responseFilter".to_string(), "Webpages".to_string());

        let response = self
            .client
            .get_with_headers(&self.base_url, &params, &headers)
            .await?;
        if !response.is_success() {
            return Err(SearchError::Upstream(format!(
                "HTTP error: {}",
                response.status
            )));
        }

        let parsed: ApiResponse = serde_json::from_str(&response.text)
            .map_err(|e| SearchError::Upstream(format!("failed to parse JSON: {}", e)))?;

        let results = parsed
            .web_pages
            .map(|pages| pages.value)
            .unwrap_or_default()
            .into_iter()
            .map(|page| {
                // Bing marks up query terms inside snippets
                let snippet = strip_tags(&page.snippet);
                SearchResult::new(page.name, page.url, snippet, SOURCE_LABEL)
            })
            .collect();

        Ok(results)
    }
}

#[async_trait]
impl Provider for Bing {
    fn name(&self) -> &str {
        "Bing"
    }

    fn min_interval(&self) -> Duration {
        Duration::from_millis(500)
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, query: &str, num_results: usize) -> ProviderOutcome {
        let deadline = Duration::from_secs(crate::DEFAULT_TIMEOUT);
        match timeout(deadline, self.fetch(query, num_results)).await {
            Ok(Ok(results)) => {
                debug!("Bing returned {} results", results.len());
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
    fn test_availability_requires_api_key() {
        assert!(!Bing::new(client(), None).is_available());
        assert!(Bing::new(client(), Some("key".into())).is_available());
    }

    #[tokio::test]
    async fn test_search_without_key_reports_not_configured() {
        let bing = Bing::new(client(), None);
        let outcome = bing.search("rust", 5).await;

        assert_eq!(outcome.status, OutcomeStatus::Error);
        assert!(outcome.error.unwrap().contains("Bing API key not configured"));
    }
}
