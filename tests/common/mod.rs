//! Shared test utilities and fixtures.

#![allow(dead_code)]

use rankwise::{Document, RankedDocument};

// Re-export canonical test utilities from rankwise::testing
pub use rankwise::testing::{doc, docs, identical_docs, links, sample_results};

// ============================================================================
// FIXTURES
// ============================================================================

/// A search-engine response with provider metadata around the results.
pub const SEARCH_RESPONSE_JSON: &str = r#"{
  "search_metadata": { "id": "6710c2", "status": "Success" },
  "search_parameters": { "q": "rust async runtime", "num": "20" },
  "search_information": { "total_results": 48200000, "time_taken_displayed": 0.41 },
  "organic_results": [
    {
      "position": 1,
      "title": "Tokio - An asynchronous Rust runtime",
      "link": "https://tokio.rs",
      "displayed_link": "tokio.rs",
      "snippet": "Tokio is an asynchronous runtime for the Rust programming language."
    },
    {
      "position": 2,
      "title": "async-std",
      "link": "https://async.rs",
      "snippet": "Async version of the Rust standard library."
    },
    {
      "position": 3,
      "title": "Python asyncio documentation",
      "link": "https://docs.python.org/3/library/asyncio.html",
      "snippet": "asyncio is a library to write concurrent code using the async/await syntax."
    },
    {
      "position": 4,
      "link": "https://example.com/untitled"
    }
  ]
}"#;

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert `a` and `b` differ by at most `tol`.
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {} ≈ {} (tol {})", a, b, tol);
}

/// Find a result by link.
pub fn by_link<'a>(results: &'a [RankedDocument], link: &str) -> &'a RankedDocument {
    results
        .iter()
        .find(|r| r.document.link == link)
        .unwrap_or_else(|| panic!("no result with link {}", link))
}

/// Documents built from `(title, snippet)` pairs with generated links.
pub fn pairs(items: &[(&str, &str)]) -> Vec<Document> {
    items
        .iter()
        .enumerate()
        .map(|(i, (title, snippet))| doc(title, snippet, &format!("https://example.com/{}", i)))
        .collect()
}
