// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind score fusion.
//!
//! Two signals, one number:
//!
//! ```text
//! final = keyword_weight * keyword_score + tfidf_weight * tfidf_score
//! ```
//!
//! Keyword score rewards literal coverage of the query. TF-IDF similarity
//! rewards documents whose term distribution points the same way as the
//! query's, weighting rare terms up. The default split leans on similarity.
//!
//! # Weights
//!
//! | Weight  | Default | Role |
//! |---------|---------|------|
//! | keyword | 0.4     | Literal query coverage |
//! | tfidf   | 0.6     | Distributional similarity |
//!
//! Weights are not normalized. Callers passing `(1.0, 1.0)` get final scores
//! in `[0, 2]`; that is their call to make, not an error. Only non-finite
//! weights are rejected, since they would poison every score with NaN.

use serde::{Deserialize, Serialize};

use crate::error::RankError;

// =============================================================================
// FUSION CONSTANTS
// =============================================================================

/// Default weight of the keyword score.
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.4;

/// Default weight of the TF-IDF similarity score.
pub const DEFAULT_TFIDF_WEIGHT: f64 = 0.6;

/// Default number of entries in each trace term list.
pub const DEFAULT_TRACE_TERMS: usize = 4;

// INVARIANT: DEFAULT_WEIGHTS_SUM_TO_ONE
// Keeps default final scores inside [0, 1].
const _: () = {
    let sum = DEFAULT_KEYWORD_WEIGHT + DEFAULT_TFIDF_WEIGHT;
    assert!(sum > 0.999_999_999 && sum < 1.000_000_001);
};

/// Fusion weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub keyword: f64,
    pub tfidf: f64,
}

impl Weights {
    pub fn new(keyword: f64, tfidf: f64) -> Result<Self, RankError> {
        let weights = Self { keyword, tfidf };
        weights.validate()?;
        Ok(weights)
    }

    /// Reject NaN and infinite weights.
    pub fn validate(&self) -> Result<(), RankError> {
        if !self.keyword.is_finite() {
            return Err(RankError::InvalidWeight {
                name: "keyword_weight",
                value: self.keyword,
            });
        }
        if !self.tfidf.is_finite() {
            return Err(RankError::InvalidWeight {
                name: "tfidf_weight",
                value: self.tfidf,
            });
        }
        Ok(())
    }

    /// Sum of both weights.
    pub fn total(&self) -> f64 {
        self.keyword + self.tfidf
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD_WEIGHT,
            tfidf: DEFAULT_TFIDF_WEIGHT,
        }
    }
}

/// Weighted sum of the two signals.
pub fn fuse(keyword_score: f64, tfidf_score: f64, weights: &Weights) -> f64 {
    // INVARIANT: FUSION_LINEARITY
    // Written as the plain weighted sum so (1, 0) returns keyword_score exactly.
    weights.keyword * keyword_score + weights.tfidf * tfidf_score
}
