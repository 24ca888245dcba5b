// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cosine similarity between sparse term vectors.
//!
//! Missing entries count as 0, so only shared terms contribute to the dot
//! product and each norm only needs its own vector. Walking the `BTreeMap`s
//! in key order keeps every sum in a fixed order, which gives two guarantees
//! the audit view relies on:
//!
//! - `cosine_similarity(a, b) == cosine_similarity(b, a)` bit for bit
//! - repeated calls on equal inputs produce identical bits
//!
//! A zero norm (empty vector, or all weights 0) yields similarity 0.

use crate::tfidf::TermVector;

/// Cosine similarity plus the intermediates that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CosineBreakdown {
    pub similarity: f64,
    pub dot_product: f64,
    pub norm_a: f64,
    pub norm_b: f64,
}

/// Full breakdown of `cos(a, b)`.
pub fn cosine_breakdown(a: &TermVector, b: &TermVector) -> CosineBreakdown {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    // Shared keys visited in sorted order regardless of which side drives
    let dot_product: f64 = small
        .iter()
        .filter_map(|(term, x)| large.get(term).map(|y| x * y))
        .sum();

    let norm_a = norm(a);
    let norm_b = norm(b);

    // INVARIANT: similarity >= 0 whenever both vectors share one IDF table,
    // since each shared term contributes tf_a * tf_b * idf^2
    let similarity = if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    };

    CosineBreakdown {
        similarity,
        dot_product,
        norm_a,
        norm_b,
    }
}

/// `cos(a, b)`, 0 when either vector has zero norm.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    cosine_breakdown(a, b).similarity
}

/// Euclidean norm of a sparse vector.
pub fn norm(v: &TermVector) -> f64 {
    v.values().map(|x| x * x).sum::<f64>().sqrt()
}
