//! Provider trait and shared types

use crate::results::ProviderOutcome;
use async_trait::async_trait;
use std::time::Duration;

/// Main capability trait that all search providers implement.
///
/// `search` is infallible by signature: every failure mode (network, parse,
/// auth, quota, timeout) is caught inside the provider and surfaced as a
/// `ProviderOutcome` with `status: Error`.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name, used for routing and rate-limit bookkeeping
    fn name(&self) -> &str;

    /// Minimum spacing between two dispatches to this provider
    fn min_interval(&self) -> Duration {
        Duration::from_secs(1)
    }

    /// Whether the provider is currently usable. Pure function of
    /// configuration, performs no I/O.
    fn is_available(&self) -> bool {
        true
    }

    /// Perform the search and return a structured outcome
    async fn search(&self, query: &str, num_results: usize) -> ProviderOutcome;
}
