// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The ranking core has exactly one way to fail: the caller broke the input
//! contract (a NaN weight, a zero trace depth, a JSON payload of the wrong
//! shape). Everything else, including empty queries, empty document lists and
//! all-stopword text, degrades to zero scores instead of erroring.
//!
//! Collaborator and history failures get their own enums so callers can tell
//! "the engine rejected my input" apart from "the search provider timed out".

use std::path::PathBuf;
use thiserror::Error;

/// Caller contract violations detected by the ranking engine.
#[derive(Debug, Error)]
pub enum RankError {
    /// A fusion weight is NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    /// The trace would hold zero terms.
    #[error("trace depth must be at least 1, got {0}")]
    InvalidTraceDepth(usize),

    /// A document payload did not decode as documents.
    #[error("malformed document payload: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Failures reported by an external collaborator (search provider, scraper,
/// content rewriter). The engine never retries; the caller decides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The collaborator could not be reached or refused the request.
    #[error("{service} unavailable: {reason}")]
    Unavailable { service: &'static str, reason: String },

    /// The collaborator did not answer within its deadline.
    #[error("{service} timed out after {after_ms}ms")]
    Timeout { service: &'static str, after_ms: u64 },

    /// The collaborator answered with something we cannot use.
    #[error("{service} returned an invalid response: {reason}")]
    InvalidResponse { service: &'static str, reason: String },
}

/// Failure to read or decode a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] RankError),
}

/// Failures of the append-only history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history record at {} is not valid JSON: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode history record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures of the search-and-rank / scrape-and-rewrite flows.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("url must not be empty")]
    EmptyUrl,

    #[error("no extractable text on {0}")]
    EmptyPage(String),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error(transparent)]
    Rank(#[from] RankError),
}
