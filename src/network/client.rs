//! HTTP client for making requests to search backends

use super::user_agent::{accept_html, generate_user_agent};
use crate::results::SearchError;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

/// HTTP response reduced to what provider parsers need
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl HttpResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client wrapper with search-friendly defaults
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with the default request timeout
    pub fn new() -> Result<Self, SearchError> {
        Self::with_timeout(Duration::from_secs(crate::DEFAULT_TIMEOUT))
    }

    /// Create a new HTTP client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            user_agent: generate_user_agent(),
        })
    }

    /// GET request with query parameters
    pub async fn get(
        &self,
        url: &str,
        params: &HashMap<String, String>,
    ) -> Result<HttpResponse, SearchError> {
        self.get_with_headers(url, params, &HashMap::new()).await
    }

    /// GET request with query parameters and extra headers
    pub async fn get_with_headers(
        &self,
        url: &str,
        params: &HashMap<String, String>,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, SearchError> {
        let mut req_builder = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html())
            .header("Accept-Language", "en-US,en;q=0.9");

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if !params.is_empty() {
            req_builder = req_builder.query(params);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> Result<HttpResponse, SearchError> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(HttpResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_response_success_range() {
        let ok = HttpResponse {
            status: 200,
            text: String::new(),
            url: "https://example.com/".to_string(),
        };
        let err = HttpResponse {
            status: 503,
            text: String::new(),
            url: "https://example.com/".to_string(),
        };

        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
