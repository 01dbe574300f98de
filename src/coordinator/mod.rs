//! Search coordination across providers
//!
//! The coordinator owns the ordered provider list and the rate-limiter
//! state. It sequences provider calls, skips unavailable providers, merges
//! and deduplicates their results, and never fails outright: degraded
//! conditions surface as statuses, not errors.

mod rate_limit;

pub use rate_limit::RateLimiter;

use crate::config::Settings;
use crate::network::HttpClient;
use crate::providers::{default_providers, Provider};
use crate::results::{
    dedup_by_url, AggregateResult, OutcomeStatus, ProviderInfo, ProviderOutcome, SearchError,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Coordinates multi-provider search with fallback and deduplication
pub struct Coordinator {
    providers: Vec<Arc<dyn Provider>>,
    limiter: RateLimiter,
}

impl Coordinator {
    /// Create a coordinator over an ordered provider list.
    ///
    /// Order is fixed for the coordinator's lifetime and defines both call
    /// order and merge precedence.
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        let limiter = RateLimiter::new(&providers);
        Self { providers, limiter }
    }

    /// Create a coordinator with the default provider stack
    pub fn from_settings(settings: &Settings) -> Result<Self, SearchError> {
        let client = HttpClient::with_timeout(Duration::from_secs(settings.request_timeout))?;
        Ok(Self::new(default_providers(settings, client)))
    }

    /// Search every available provider and merge the outcomes.
    ///
    /// Unavailable providers are skipped silently. Results from
    /// earlier-registered providers win URL collisions.
    pub async fn search_all(&self, query: &str, num_results: usize) -> AggregateResult {
        let mut combined = Vec::new();
        let mut provider_statuses = Vec::new();

        for provider in &self.providers {
            if !provider.is_available() {
                debug!("skipping unavailable provider {}", provider.name());
                continue;
            }

            self.limiter.acquire(provider.name()).await;
            let outcome = provider.search(query, num_results).await;

            provider_statuses.push(outcome.status_summary());

            if outcome.status == OutcomeStatus::Success && !outcome.results.is_empty() {
                combined.extend(outcome.results);
            }
        }

        let unique = dedup_by_url(combined);
        let total_results = unique.len();
        let results: Vec<_> = unique.into_iter().take(num_results).collect();

        let status = if results.is_empty() {
            OutcomeStatus::NoResults
        } else {
            OutcomeStatus::Success
        };

        info!(
            "search '{}' merged {} unique results from {} attempted providers",
            query,
            total_results,
            provider_statuses.len()
        );

        AggregateResult {
            query: query.to_string(),
            results,
            total_results,
            provider_statuses,
            status,
        }
    }

    /// Search one provider by name (case-insensitive)
    pub async fn search_one(
        &self,
        query: &str,
        num_results: usize,
        provider_name: &str,
    ) -> ProviderOutcome {
        for provider in &self.providers {
            if provider.name().eq_ignore_ascii_case(provider_name) {
                if !provider.is_available() {
                    let err = SearchError::NotConfigured(format!("{} provider", provider.name()));
                    return ProviderOutcome::failure(provider.name(), query, &err);
                }

                self.limiter.acquire(provider.name()).await;
                return provider.search(query, num_results).await;
            }
        }

        // No provider matched, so this is a coordinator-level error
        let err = SearchError::UnknownProvider(provider_name.to_string());
        ProviderOutcome::failure("coordinator", query, &err)
    }

    /// Registration-order listing of providers and their availability
    pub fn provider_status(&self) -> Vec<ProviderInfo> {
        self.providers
            .iter()
            .map(|p| ProviderInfo {
                name: p.name().to_string(),
                available: p.is_available(),
                min_interval_secs: p.min_interval().as_secs_f64(),
            })
            .collect()
    }
}
