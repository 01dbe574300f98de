//! Per-provider minimum-interval throttle

use crate::providers::Provider;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

struct Slot {
    min_interval: Duration,
    /// Timestamp of the last dispatch. Guarded per provider so waiting on
    /// one provider never blocks another, while the wait-then-record step
    /// stays atomic for concurrent calls to the same provider.
    last_dispatch: Mutex<Option<Instant>>,
}

/// Tracks last-dispatch timestamps for every registered provider.
///
/// The slot map is fixed at construction; only the timestamps mutate.
pub struct RateLimiter {
    slots: HashMap<String, Slot>,
}

impl RateLimiter {
    /// Build a limiter with one slot per provider
    pub fn new(providers: &[Arc<dyn Provider>]) -> Self {
        let slots = providers
            .iter()
            .map(|p| {
                (
                    p.name().to_string(),
                    Slot {
                        min_interval: p.min_interval(),
                        last_dispatch: Mutex::new(None),
                    },
                )
            })
            .collect();

        Self { slots }
    }

    /// Block until the provider's minimum interval has elapsed since its
    /// last dispatch, then record the new dispatch time.
    pub async fn acquire(&self, provider_name: &str) {
        let Some(slot) = self.slots.get(provider_name) else {
            return;
        };

        let mut last = slot.last_dispatch.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < slot.min_interval {
                let wait = slot.min_interval - elapsed;
                debug!("rate limit: waiting {:?} before {}", wait, provider_name);
                sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ProviderOutcome;
    use async_trait::async_trait;

    struct FixedProvider {
        name: &'static str,
        interval: Duration,
    }

    #[async_trait]
    impl Provider for FixedProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn min_interval(&self) -> Duration {
            self.interval
        }

        async fn search(&self, query: &str, _num_results: usize) -> ProviderOutcome {
            ProviderOutcome::from_results(self.name, query, vec![])
        }
    }

    fn limiter() -> RateLimiter {
        let providers: Vec<Arc<dyn Provider>> = vec![
            Arc::new(FixedProvider {
                name: "fast",
                interval: Duration::from_millis(100),
            }),
            Arc::new(FixedProvider {
                name: "slow",
                interval: Duration::from_secs(2),
            }),
        ];
        RateLimiter::new(&providers)
    }

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_calls_are_spaced() {
        let limiter = limiter();

        limiter.acquire("slow").await;
        let first = Instant::now();
        limiter.acquire("slow").await;
        let second = Instant::now();

        assert!(second - first >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_providers_are_throttled_independently() {
        let limiter = limiter();

        limiter.acquire("slow").await;
        let before = Instant::now();
        limiter.acquire("fast").await;
        let after = Instant::now();

        // A pending interval on "slow" must not delay "fast"
        assert_eq!(before, after);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_provider_is_a_no_op() {
        let limiter = limiter();
        let before = Instant::now();
        limiter.acquire("missing").await;
        assert_eq!(before, Instant::now());
    }
}
