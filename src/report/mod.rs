//! Human-readable report formatting
//!
//! Thin presentation layer over the coordinator's structured output. Nothing
//! in here affects control flow; it only renders.

use crate::research::{Depth, ResearchEntry};
use crate::results::{AggregateResult, OutcomeStatus, ProviderInfo, ProviderOutcome, SearchResult};
use std::fmt::Write;

fn push_result(out: &mut String, index: usize, result: &SearchResult) {
    let _ = writeln!(out, "{}. **{}**", index, result.title);
    let _ = writeln!(out, "   URL: {}", result.url);
    let _ = writeln!(out, "   Snippet: {}", result.snippet);
    let _ = writeln!(out, "   Source: {}", result.source);
    out.push('\n');
}

/// Render an aggregated multi-provider search
pub fn aggregate(result: &AggregateResult) -> String {
    match result.status {
        OutcomeStatus::Success => {
            let header = format!("Web Search Results for: '{}'", result.query);
            let mut out = format!("{}\n{}\n\n", header, "=".repeat(header.len()));

            for (i, item) in result.results.iter().enumerate() {
                push_result(&mut out, i + 1, item);
            }

            out.push_str("\nProvider Status:\n");
            for status in &result.provider_statuses {
                let _ = writeln!(
                    out,
                    "- {}: {} ({} results)",
                    status.provider, status.status, status.result_count
                );
            }

            out
        }
        _ => format!(
            "No search results found for: '{}'\n\nProvider attempts made but no results returned.",
            result.query
        ),
    }
}

/// Render a single-provider outcome
pub fn outcome(outcome: &ProviderOutcome) -> String {
    match outcome.status {
        OutcomeStatus::Error => {
            let detail = outcome.error.as_deref().unwrap_or("Unknown error occurred");
            format!("Search failed for: '{}'\nError: {}", outcome.query, detail)
        }
        OutcomeStatus::NoResults => format!(
            "No search results found for: '{}'\n\nProvider attempts made but no results returned.",
            outcome.query
        ),
        OutcomeStatus::Success => {
            let header = format!(
                "Web Search Results for: '{}' ({})",
                outcome.query, outcome.provider
            );
            let mut out = format!("{}\n{}\n\n", header, "=".repeat(header.len()));

            for (i, item) in outcome.results.iter().enumerate() {
                push_result(&mut out, i + 1, item);
            }

            out
        }
    }
}

/// Render a multi-query research report
pub fn research(topic: &str, depth: Depth, entries: &[ResearchEntry]) -> String {
    let header = format!("Research Report: {}", topic);
    let mut out = format!("{}\n{}\n\n", header, "=".repeat(header.len()));

    let total_sources: usize = entries.iter().map(|e| e.results.len()).sum();
    let _ = writeln!(out, "Research Depth: {}", depth);
    let _ = writeln!(out, "Search Queries: {}", entries.len());
    let _ = writeln!(out, "Total Sources Found: {}\n", total_sources);

    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "## Search Topic {}: {}\n", i + 1, entry.query);
        for (j, result) in entry.results.iter().enumerate() {
            push_result(&mut out, j + 1, result);
        }
    }

    if total_sources == 0 {
        out.push_str("No research results found. Try a different topic or search terms.\n");
    }

    out
}

/// Render the provider availability listing
pub fn provider_status(infos: &[ProviderInfo]) -> String {
    let mut out = String::from("Web Search Provider Status\n==========================\n\n");

    for info in infos {
        let _ = writeln!(out, "**{}**", info.name);
        let availability = if info.available {
            "yes"
        } else {
            "no (configuration needed)"
        };
        let _ = writeln!(out, "- Available: {}", availability);
        let _ = writeln!(
            out,
            "- Rate Limit: {}s between requests",
            info.min_interval_secs
        );
        if let Some(hint) = config_hint(&info.name, info.available) {
            let _ = writeln!(out, "- Config: {}", hint);
        }
        out.push('\n');
    }

    let available = infos.iter().filter(|i| i.available).count();
    let _ = writeln!(out, "Summary: {}/{} providers available", available, infos.len());

    out
}

fn config_hint(name: &str, available: bool) -> Option<&'static str> {
    match name {
        "Google" if !available => {
            Some("Set GOOGLE_SEARCH_API_KEY and GOOGLE_SEARCH_ENGINE_ID environment variables")
        }
        "Bing" if !available => Some("Set BING_SEARCH_API_KEY environment variable"),
        "DuckDuckGo" => Some("No API key required (always available)"),
        _ => None,
    }
}
