//! Result and outcome type definitions

use serde::{Deserialize, Serialize};
use url::Url;

/// A single search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The URL of the result
    pub url: String,
    /// The title of the result
    pub title: String,
    /// Content snippet/description
    pub snippet: String,
    /// Label of the source that produced this result
    pub source: String,
}

impl SearchResult {
    /// Create a new result
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            snippet: snippet.into(),
            source: source.into(),
        }
    }

    /// Whether the URL is a non-empty absolute URL, which makes the result
    /// eligible for aggregation.
    pub fn has_absolute_url(&self) -> bool {
        !self.url.is_empty() && Url::parse(&self.url).is_ok()
    }

    /// Get the hostname from the URL
    pub fn hostname(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }
}

/// Status of a provider call or an aggregated search
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Success,
    NoResults,
    Error,
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::NoResults => write!(f, "no_results"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The outcome of a single provider call. Produced once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOutcome {
    /// Provider that produced this outcome
    pub provider: String,
    /// The query that was searched
    pub query: String,
    /// Results in provider order
    pub results: Vec<SearchResult>,
    /// Number of results the provider returned
    pub total_results: usize,
    /// Call status
    pub status: OutcomeStatus,
    /// Error detail when status is `Error`
    pub error: Option<String>,
}

impl ProviderOutcome {
    /// Build a success/no-results outcome from a result list
    pub fn from_results(
        provider: impl Into<String>,
        query: impl Into<String>,
        results: Vec<SearchResult>,
    ) -> Self {
        let status = if results.is_empty() {
            OutcomeStatus::NoResults
        } else {
            OutcomeStatus::Success
        };
        Self {
            provider: provider.into(),
            query: query.into(),
            total_results: results.len(),
            results,
            status,
            error: None,
        }
    }

    /// Build an error outcome
    pub fn failure(
        provider: impl Into<String>,
        query: impl Into<String>,
        error: &SearchError,
    ) -> Self {
        Self {
            provider: provider.into(),
            query: query.into(),
            results: Vec::new(),
            total_results: 0,
            status: OutcomeStatus::Error,
            error: Some(error.to_string()),
        }
    }

    /// Projection used for reporting
    pub fn status_summary(&self) -> ProviderStatus {
        ProviderStatus {
            provider: self.provider.clone(),
            status: self.status,
            result_count: self.total_results,
        }
    }
}

/// Per-provider status entry attached to an aggregated search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub provider: String,
    pub status: OutcomeStatus,
    pub result_count: usize,
}

/// The deduplicated, truncated multi-provider search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    /// The query that was searched
    pub query: String,
    /// Deduplicated results, truncated to the requested count
    pub results: Vec<SearchResult>,
    /// Number of unique results before truncation
    pub total_results: usize,
    /// One entry per attempted provider, in registration order
    pub provider_statuses: Vec<ProviderStatus>,
    /// `Success` if any result survived dedup and truncation
    pub status: OutcomeStatus,
}

/// Registration-time provider metadata, used for status listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub available: bool,
    pub min_interval_secs: f64,
}

/// Provider and coordinator error taxonomy
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Missing credentials. The payload names what is missing,
    /// e.g. "Google API key or Search Engine ID".
    #[error("{0} not configured")]
    NotConfigured(String),

    /// Connection, DNS or transport failure
    #[error("network failure: {0}")]
    Network(String),

    /// The call did not complete within the allowed time
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Non-success HTTP status or malformed response body
    #[error("upstream error: {0}")]
    Upstream(String),

    /// No registered provider matched the requested name
    #[error("provider \"{0}\" not found")]
    UnknownProvider(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(crate::DEFAULT_TIMEOUT)
        } else if err.is_connect() || err.is_request() {
            Self::Network(err.to_string())
        } else {
            Self::Upstream(err.to_string())
        }
    }
}
