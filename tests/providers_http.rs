//! Provider parsing and failure handling against a local mock server

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use websearch_rs::network::HttpClient;
use websearch_rs::providers::{Bing, DuckDuckGo, Google, CURATED_SOURCE};
use websearch_rs::results::OutcomeStatus;
use websearch_rs::Provider;

fn client() -> HttpClient {
    HttpClient::new().unwrap()
}

#[tokio::test]
async fn google_parses_custom_search_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("q", "rust language"))
        .and(query_param("key", "test-key"))
        .and(query_param("cx", "test-cx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "title": "Rust Programming Language",
                    "link": "https://www.rust-lang.org/",
                    "snippet": "A language empowering everyone."
                },
                {
                    "title": "The Rust Book",
                    "link": "https://doc.rust-lang.org/book/",
                    "snippet": "Learn Rust from first principles."
                }
            ]
        })))
        .mount(&server)
        .await;

    let google = Google::new(client(), Some("test-key".into()), Some("test-cx".into()))
        .with_base_url(format!("{}/customsearch/v1", server.uri()));

    let outcome = google.search("rust language", 5).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.total_results, 2);
    assert_eq!(outcome.results[0].url, "https://www.rust-lang.org/");
    assert_eq!(outcome.results[0].source, "Google Search");
}

#[tokio::test]
async fn google_caps_requested_count_at_api_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("num", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let google = Google::new(client(), Some("k".into()), Some("c".into()))
        .with_base_url(format!("{}/customsearch/v1", server.uri()));

    let outcome = google.search("rust", 25).await;
    assert_eq!(outcome.status, OutcomeStatus::NoResults);
}

#[tokio::test]
async fn google_reports_upstream_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let google = Google::new(client(), Some("k".into()), Some("c".into()))
        .with_base_url(format!("{}/customsearch/v1", server.uri()));

    let outcome = google.search("rust", 5).await;
    assert_eq!(outcome.status, OutcomeStatus::Error);
    assert!(outcome.error.unwrap().contains("403"));
}

#[tokio::test]
async fn bing_sends_subscription_key_and_strips_markup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v7.0/search"))
        .and(header("Ocp-Apim-Subscription-Key", "bing-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "webPages": {
                "value": [
                    {
                        "name": "Rust (programming language)",
                        "url": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
                        "snippet": "<b>Rust</b> is a <i>systems</i> language."
                    }
                ]
            }
        })))
        .mount(&server)
        .await;

    let bing = Bing::new(client(), Some("bing-key".into()))
        .with_base_url(format!("{}/v7.0/search", server.uri()));

    let outcome = bing.search("rust", 5).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.results[0].snippet, "Rust is a systems language.");
    assert_eq!(outcome.results[0].source, "Bing Search");
}

#[tokio::test]
async fn bing_handles_missing_webpages_section() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let bing = Bing::new(client(), Some("bing-key".into()))
        .with_base_url(format!("{}/v7.0/search", server.uri()));

    let outcome = bing.search("rust", 5).await;
    assert_eq!(outcome.status, OutcomeStatus::NoResults);
}

#[tokio::test]
async fn duckduckgo_parses_lite_page() {
    let server = MockServer::start().await;

    let page = r#"
        <html><body><table>
          <tr><td><a class="result-link" href="https://www.rust-lang.org/">Rust Programming Language</a></td></tr>
          <tr><td class="result-snippet">A language empowering everyone.</td></tr>
        </table></body></html>
    "#;

    Mock::given(method("GET"))
        .and(path("/lite"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let ddg = DuckDuckGo::new(client()).with_html_url(format!("{}/lite", server.uri()));

    let outcome = ddg.search("rust", 5).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.results[0].source, "DuckDuckGo Search");
    assert_eq!(outcome.results[0].url, "https://www.rust-lang.org/");
}

#[tokio::test]
async fn duckduckgo_empty_page_falls_back_to_curated_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lite"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    // Instant-answer API is down; its failure must not affect the outcome
    Mock::given(method("GET"))
        .and(path("/instant"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ddg = DuckDuckGo::new(client())
        .with_html_url(format!("{}/lite", server.uri()))
        .with_api_url(format!("{}/instant", server.uri()));

    let outcome = ddg.search("python programming", 5).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert!(!outcome.results.is_empty());
    assert!(outcome.results.iter().all(|r| r.source == CURATED_SOURCE));
}

#[tokio::test]
async fn duckduckgo_appends_instant_answers_to_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lite"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/instant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Heading": "Python",
            "Abstract": "Python is a programming language.",
            "AbstractURL": "https://en.wikipedia.org/wiki/Python",
            "RelatedTopics": [
                {
                    "Text": "Guido van Rossum - creator of Python",
                    "FirstURL": "https://en.wikipedia.org/wiki/Guido_van_Rossum"
                }
            ]
        })))
        .mount(&server)
        .await;

    let ddg = DuckDuckGo::new(client())
        .with_html_url(format!("{}/lite", server.uri()))
        .with_api_url(format!("{}/instant", server.uri()));

    let outcome = ddg.search("python", 10).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    let sources: Vec<&str> = outcome.results.iter().map(|r| r.source.as_str()).collect();
    assert!(sources.contains(&CURATED_SOURCE));
    assert!(sources.contains(&"DuckDuckGo Abstract"));
    assert!(sources.contains(&"DuckDuckGo Related"));
}

#[tokio::test]
async fn duckduckgo_http_failure_yields_error_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lite"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let ddg = DuckDuckGo::new(client()).with_html_url(format!("{}/lite", server.uri()));

    let outcome = ddg.search("rust", 5).await;
    assert_eq!(outcome.status, OutcomeStatus::Error);
    assert!(outcome.error.unwrap().contains("503"));
}
