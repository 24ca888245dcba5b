// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranking output.
//!
//! Debug-mode assertions run at the end of every ranking call. They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` plus `cfg!` guards)
//! 2. **Early failure detection** while the scoring code changes
//! 3. **Checks on the output alone**, never on engine internals
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The audit view promises that every number it shows can be recomputed by
//! hand. These contracts are where that promise is enforced.
//!
//! | Contract                       | Property |
//! |--------------------------------|----------|
//! | `check_ranked_sorted`          | final score non-increasing down the list |
//! | `check_fusion`                 | final = kw·keyword + tw·tfidf, exactly |
//! | `check_traces_reproducible`    | tf, idf, keyword and cosine recompute from the trace |

use crate::scoring::{fuse, ranking::is_ranked, Weights};
use crate::types::RankedDocument;

/// Tolerance for recomputed trace values.
pub const TRACE_TOLERANCE: f64 = 1e-9;

// ============================================================================
// ORDERING
// ============================================================================

/// Check the result is sorted by final score descending.
#[inline]
pub fn check_ranked_sorted(results: &[RankedDocument]) {
    debug_assert!(
        is_ranked(results),
        "Contract violation: results not sorted by final score descending: {:?}",
        results.iter().map(|r| r.final_score).collect::<Vec<_>>()
    );
}

// ============================================================================
// FUSION
// ============================================================================

/// Check each final score is the weighted fusion of its two signals.
#[inline]
pub fn check_fusion(results: &[RankedDocument], weights: &Weights) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (i, result) in results.iter().enumerate() {
        let expected = fuse(result.keyword_score, result.tfidf_score, weights);
        debug_assert!(
            result.final_score == expected || (result.final_score.is_nan() && expected.is_nan()),
            "Contract violation: results[{}].final_score {} != fused {}",
            i,
            result.final_score,
            expected
        );
    }
}

// ============================================================================
// TRACE
// ============================================================================

/// Check every number in each trace recomputes from the trace's own fields.
#[inline]
pub fn check_traces_reproducible(results: &[RankedDocument]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (i, result) in results.iter().enumerate() {
        let trace = &result.calculation_trace;

        debug_assert!(
            close(trace.recomputed_keyword_score(), result.keyword_score),
            "Contract violation: results[{}] keyword score {} does not match trace {}/{}",
            i,
            result.keyword_score,
            trace.matched_terms.len(),
            trace.query_terms.len()
        );

        debug_assert!(
            close(trace.recomputed_similarity(), result.tfidf_score),
            "Contract violation: results[{}] tfidf score {} does not match dot {} / ({} * {})",
            i,
            result.tfidf_score,
            trace.dot_product,
            trace.query_norm,
            trace.document_norm
        );

        for entry in &trace.top_tf_terms {
            debug_assert!(
                close(entry.recomputed_tf(), entry.tf),
                "Contract violation: results[{}] tf({}) = {} but {}/{}",
                i,
                entry.term,
                entry.tf,
                entry.count,
                entry.total_terms
            );
        }

        for entry in &trace.top_idf_terms {
            debug_assert!(
                close(entry.recomputed_idf(), entry.idf),
                "Contract violation: results[{}] idf({}) = {} but ln({}/({}+1))",
                i,
                entry.term,
                entry.idf,
                entry.total_docs,
                entry.docs_with_term
            );
        }
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TRACE_TOLERANCE
}
