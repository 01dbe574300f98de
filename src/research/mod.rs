//! Research sessions: depth-driven expansion of one topic into several
//! related queries, each searched independently.

use crate::coordinator::Coordinator;
use crate::results::SearchResult;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How broadly a topic is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Quick,
    Standard,
    Deep,
}

impl Depth {
    /// Result cap applied to each query variant
    pub fn results_per_query(&self) -> usize {
        match self {
            Self::Quick => 5,
            Self::Standard => 6,
            Self::Deep => 8,
        }
    }

    /// The fixed query variants generated for a topic
    pub fn query_plan(&self, topic: &str) -> Vec<String> {
        match self {
            Self::Quick => vec![topic.to_string()],
            Self::Standard => vec![
                topic.to_string(),
                format!("{} overview", topic),
                format!("{} latest developments", topic),
            ],
            Self::Deep => vec![
                topic.to_string(),
                format!("{} analysis", topic),
                format!("{} examples", topic),
                format!("{} best practices", topic),
                format!("latest {} trends", topic),
            ],
        }
    }
}

impl FromStr for Depth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "standard" => Ok(Self::Standard),
            "deep" => Ok(Self::Deep),
            other => Err(format!(
                "unknown depth \"{}\" (expected quick, standard, or deep)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quick => write!(f, "quick"),
            Self::Standard => write!(f, "standard"),
            Self::Deep => write!(f, "deep"),
        }
    }
}

/// One searched query variant and its results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchEntry {
    pub query: String,
    pub results: Vec<SearchResult>,
}

/// Run every query variant for a topic through the coordinator.
///
/// Entries come back in generation order, one per variant even when a
/// variant yields nothing. Distinct queries may legitimately return
/// overlapping URLs, so there is no cross-query deduplication.
pub async fn run_research(
    coordinator: &Coordinator,
    topic: &str,
    depth: Depth,
) -> Vec<ResearchEntry> {
    let cap = depth.results_per_query();
    let mut entries = Vec::new();

    for query in depth.query_plan(topic) {
        let aggregate = coordinator.search_all(&query, cap).await;
        entries.push(ResearchEntry {
            query,
            results: aggregate.results,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_plan() {
        let queries = Depth::Quick.query_plan("rust");
        assert_eq!(queries, vec!["rust"]);
        assert_eq!(Depth::Quick.results_per_query(), 5);
    }

    #[test]
    fn test_standard_plan() {
        let queries = Depth::Standard.query_plan("blockchain");
        assert_eq!(
            queries,
            vec![
                "blockchain",
                "blockchain overview",
                "blockchain latest developments",
            ]
        );
        assert_eq!(Depth::Standard.results_per_query(), 6);
    }

    #[test]
    fn test_deep_plan() {
        let queries = Depth::Deep.query_plan("kubernetes");
        assert_eq!(queries.len(), 5);
        assert_eq!(queries[0], "kubernetes");
        assert_eq!(queries[4], "latest kubernetes trends");
        assert_eq!(Depth::Deep.results_per_query(), 8);
    }

    #[test]
    fn test_depth_parsing() {
        assert_eq!("quick".parse::<Depth>().unwrap(), Depth::Quick);
        assert_eq!("DEEP".parse::<Depth>().unwrap(), Depth::Deep);
        assert!("shallow".parse::<Depth>().is_err());
    }
}
