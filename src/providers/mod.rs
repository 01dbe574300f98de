//! Search providers
//!
//! Each provider exposes one web-search backend through the uniform
//! `Provider` capability. The coordinator owns providers as an ordered list
//! of trait objects; registration order defines fallback precedence.

mod bing;
mod curated;
mod duckduckgo;
mod google;
mod traits;

pub use bing::Bing;
pub use curated::{fallback_results, CURATED_SOURCE, DIRECT_SOURCE};
pub use duckduckgo::DuckDuckGo;
pub use google::Google;
pub use traits::Provider;

use crate::config::Settings;
use crate::network::HttpClient;
use std::sync::Arc;

/// Build the default provider list from settings.
///
/// Order matters: credentialed APIs first, DuckDuckGo last as the
/// always-available fallback.
pub fn default_providers(settings: &Settings, client: HttpClient) -> Vec<Arc<dyn Provider>> {
    vec![
        Arc::new(Google::new(
            client.clone(),
            settings.google_api_key.clone(),
            settings.google_engine_id.clone(),
        )),
        Arc::new(Bing::new(client.clone(), settings.bing_api_key.clone())),
        Arc::new(DuckDuckGo::new(client)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_order() {
        let settings = Settings::default();
        let client = HttpClient::new().unwrap();
        let providers = default_providers(&settings, client);

        let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Google", "Bing", "DuckDuckGo"]);
    }

    #[test]
    fn test_only_duckduckgo_available_without_credentials() {
        let settings = Settings::default();
        let client = HttpClient::new().unwrap();
        let providers = default_providers(&settings, client);

        let available: Vec<&str> = providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.name())
            .collect();
        assert_eq!(available, vec!["DuckDuckGo"]);
    }
}
