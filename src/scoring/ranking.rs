// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: final score descending, input order among ties.
//!
//! There is no secondary key. Two documents whose final scores compare equal
//! keep the relative order the search provider gave them. Floating-point
//! fused scores coincide more often than one might expect (identical
//! snippets, two documents with zero overlap), so this is a real rule, not
//! a corner case.
//!
//! `slice::sort_by` is a stable merge sort, which is the whole mechanism.
//! Scores are compared with `partial_cmp`, so `0.0` and `-0.0` tie, and NaN
//! (unreachable once weights are validated) ties with everything rather
//! than panicking.

use std::cmp::Ordering;

use crate::types::RankedDocument;

/// Compare two ranked documents: higher final score first.
pub fn compare_ranked(a: &RankedDocument, b: &RankedDocument) -> Ordering {
    b.final_score
        .partial_cmp(&a.final_score)
        .unwrap_or(Ordering::Equal)
}

/// Stable sort by final score descending.
pub fn sort_ranked(results: &mut [RankedDocument]) {
    // INVARIANT: STABLE_TIE_BREAK
    // Must stay a stable sort; sort_unstable_by would reorder ties.
    results.sort_by(compare_ranked);
}

/// Whether `results` is ordered by final score descending.
pub fn is_ranked(results: &[RankedDocument]) -> bool {
    results
        .windows(2)
        .all(|pair| compare_ranked(&pair[0], &pair[1]) != Ordering::Greater)
}
