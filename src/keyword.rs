// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword matching: what fraction of the query literally appears?
//!
//! ```text
//! Query terms:    [rust, async, rust]
//! Document terms: {rust, tokio, runtime}
//!
//! matched = [rust, rust]       (each query occurrence tested on its own)
//! score   = 2 / 3
//! ```
//!
//! Repeated query terms are NOT collapsed. A query that says "rust" twice and
//! a document that mentions rust once matches twice, counting toward both the
//! numerator and the denominator.

use std::collections::HashSet;

use crate::tokenize::Tokenizer;

/// Detailed keyword match result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatch {
    /// `matched_terms.len() / query_terms.len()`, or 0 for an empty query.
    pub score: f64,
    pub query_terms: Vec<String>,
    /// Query terms present in the document, in query order, repeats kept.
    pub matched_terms: Vec<String>,
}

/// Match pre-tokenized query terms against pre-tokenized document terms.
pub fn keyword_match(query_terms: &[String], document_terms: &[String]) -> KeywordMatch {
    if query_terms.is_empty() {
        return KeywordMatch::default();
    }

    let present: HashSet<&str> = document_terms.iter().map(String::as_str).collect();
    let matched_terms: Vec<String> = query_terms
        .iter()
        .filter(|term| present.contains(term.as_str()))
        .cloned()
        .collect();

    // INVARIANT: score ∈ [0, 1] since matched_terms ⊆ query_terms (as a multiset)
    let score = matched_terms.len() as f64 / query_terms.len() as f64;

    KeywordMatch {
        score,
        query_terms: query_terms.to_vec(),
        matched_terms,
    }
}

/// Tokenize both sides and match.
pub fn keyword_match_text(tokenizer: &Tokenizer, query: &str, document_text: &str) -> KeywordMatch {
    keyword_match(&tokenizer.tokenize(query), &tokenizer.tokenize(document_text))
}

/// Keyword score alone.
pub fn keyword_score(tokenizer: &Tokenizer, query: &str, document_text: &str) -> f64 {
    keyword_match_text(tokenizer, query, document_text).score
}
