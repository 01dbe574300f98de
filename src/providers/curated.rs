//! Curated fallback results for the zero-configuration provider
//!
//! The DuckDuckGo scrape path is best-effort; when it parses nothing, the
//! provider serves a small topic-keyed set of reference links instead of an
//! empty response. Entries are matched by keyword against the query.

use crate::results::SearchResult;

/// Source label for curated fallback results
pub const CURATED_SOURCE: &str = "DuckDuckGo Fallback (Curated)";

/// Source label for the direct-search link used when no topic matches
pub const DIRECT_SOURCE: &str = "DuckDuckGo Direct";

type Entry = (&'static str, &'static str, &'static str);

const CURATED: &[(&str, &[Entry])] = &[
    (
        "rust",
        &[
            (
                "Rust Programming Language",
                "https://www.rust-lang.org/",
                "Official Rust website with installation, learning resources, and documentation.",
            ),
            (
                "The Rust Book",
                "https://doc.rust-lang.org/book/",
                "The canonical introduction to Rust, covering ownership, traits, and concurrency.",
            ),
            (
                "crates.io",
                "https://crates.io/",
                "The official registry for Rust packages and libraries.",
            ),
        ],
    ),
    (
        "python",
        &[
            (
                "Python Official Documentation",
                "https://docs.python.org/",
                "Official Python documentation with tutorials, library reference, and language reference.",
            ),
            (
                "Real Python Tutorials",
                "https://realpython.com/",
                "High-quality Python tutorials, articles, and resources for developers.",
            ),
            (
                "Python Package Index (PyPI)",
                "https://pypi.org/",
                "The official repository for Python packages and libraries.",
            ),
        ],
    ),
    (
        "javascript",
        &[
            (
                "MDN JavaScript Guide",
                "https://developer.mozilla.org/en-US/docs/Web/JavaScript",
                "Comprehensive JavaScript documentation and tutorials.",
            ),
            (
                "JavaScript.info",
                "https://javascript.info/",
                "Modern JavaScript tutorial covering basics to advanced topics.",
            ),
            (
                "npm Registry",
                "https://www.npmjs.com/",
                "Package manager for JavaScript with millions of packages.",
            ),
        ],
    ),
    (
        "programming",
        &[
            (
                "Stack Overflow",
                "https://stackoverflow.com/",
                "Programming Q&A community with millions of questions and answers.",
            ),
            (
                "GitHub",
                "https://github.com/",
                "Code hosting platform with millions of open source projects.",
            ),
            (
                "MDN Web Docs",
                "https://developer.mozilla.org/",
                "Web development documentation and resources.",
            ),
        ],
    ),
    (
        "machine learning",
        &[
            (
                "Scikit-learn",
                "https://scikit-learn.org/",
                "Machine learning library for Python with comprehensive documentation.",
            ),
            (
                "TensorFlow",
                "https://www.tensorflow.org/",
                "Open source machine learning platform.",
            ),
            (
                "Kaggle Learn",
                "https://www.kaggle.com/learn",
                "Free machine learning courses and datasets.",
            ),
        ],
    ),
];

/// Build fallback results for a query.
///
/// Keyword-matched curated entries when a topic applies, otherwise a single
/// direct-search link so the caller always gets something actionable.
pub fn fallback_results(query: &str, num_results: usize) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();

    for (keyword, entries) in CURATED {
        if query_lower.contains(keyword) {
            return entries
                .iter()
                .take(num_results)
                .map(|(title, url, snippet)| {
                    SearchResult::new(*title, *url, *snippet, CURATED_SOURCE)
                })
                .collect();
        }
    }

    vec![SearchResult::new(
        format!("Search for \"{}\" - General Resources", query),
        format!("https://duckduckgo.com/?q={}", urlencoding::encode(query)),
        format!(
            "General search results for \"{}\". Open to search directly on DuckDuckGo.",
            query
        ),
        DIRECT_SOURCE,
    )]
}
