// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a document with every field given.
pub fn doc(title: &str, snippet: &str, link: &str) -> Document {
    Document::new(title, snippet, link)
}

/// Create one document per title, linked `https://example.com/<index>`.
///
/// This is the canonical implementation used across all tests.
pub fn docs(titles: &[&str]) -> Vec<Document> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| Document::new(*title, "", format!("https://example.com/{}", i)))
        .collect()
}

/// Create `count` documents with identical text, distinguished only by link.
pub fn identical_docs(count: usize, title: &str, snippet: &str) -> Vec<Document> {
    (0..count)
        .map(|i| Document::new(title, snippet, format!("https://example.com/{}", i)))
        .collect()
}

/// A small search-result page used by determinism and trace tests.
pub fn sample_results() -> Vec<Document> {
    vec![
        doc(
            "Machine Learning Tutorial for Beginners",
            "A complete machine learning tutorial covering regression and classification.",
            "https://ml.example/tutorial",
        ),
        doc(
            "Deep Learning Book",
            "An introduction to deep neural networks and representation learning.",
            "https://dl.example/book",
        ),
        doc(
            "Best machine learning tutorials for 2024",
            "Curated list of courses, videos and hands-on projects.",
            "https://lists.example/ml-2024",
        ),
        doc(
            "Cooking with cast iron",
            "Seasoning, cleaning and recipes for cast iron pans.",
            "https://food.example/cast-iron",
        ),
        doc(
            "Statistics tutorial",
            "Probability, distributions and hypothesis testing explained.",
            "https://stats.example/tutorial",
        ),
    ]
}

/// Links of a ranked list, in order.
pub fn links(results: &[crate::types::RankedDocument]) -> Vec<&str> {
    results.iter().map(|r| r.document.link.as_str()).collect()
}
