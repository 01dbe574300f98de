//! WebSearch-RS: a multi-provider web search coordinator written in Rust
//!
//! Queries several web-search backends behind a uniform `Provider`
//! capability, throttles each one independently, and merges their results
//! into a single deduplicated, bounded response.

pub mod config;
pub mod coordinator;
pub mod network;
pub mod providers;
pub mod report;
pub mod research;
pub mod results;

pub use config::Settings;
pub use coordinator::Coordinator;
pub use providers::Provider;
pub use research::{run_research, Depth, ResearchEntry};
pub use results::{AggregateResult, ProviderOutcome, SearchResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for provider requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;
