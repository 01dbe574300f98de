//! Configuration for WebSearch-RS
//!
//! Settings come from the process environment and are read exactly once at
//! startup. A missing credential makes the matching provider unavailable for
//! the lifetime of the process.

use crate::DEFAULT_TIMEOUT;

/// Environment variable holding the Google Custom Search API key
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_SEARCH_API_KEY";
/// Environment variable holding the Google Custom Search engine id
pub const GOOGLE_ENGINE_ID_VAR: &str = "GOOGLE_SEARCH_ENGINE_ID";
/// Environment variable holding the Bing Web Search API key
pub const BING_API_KEY_VAR: &str = "BING_SEARCH_API_KEY";

/// Runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Google Custom Search API key
    pub google_api_key: Option<String>,
    /// Google Custom Search engine identifier
    pub google_engine_id: Option<String>,
    /// Bing Web Search API key
    pub bing_api_key: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_engine_id: None,
            bing_api_key: None,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self {
            google_api_key: non_empty_var(GOOGLE_API_KEY_VAR),
            google_engine_id: non_empty_var(GOOGLE_ENGINE_ID_VAR),
            bing_api_key: non_empty_var(BING_API_KEY_VAR),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.google_api_key.is_none());
        assert!(settings.bing_api_key.is_none());
        assert_eq!(settings.request_timeout, DEFAULT_TIMEOUT);
    }
}
