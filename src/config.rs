// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranker configuration.
//!
//! A JSON file with camelCase keys, every field optional:
//!
//! ```json
//! {
//!   "keywordWeight": 0.4,
//!   "tfidfWeight": 0.6,
//!   "traceTerms": 4,
//!   "extraStopwords": ["best", "guide"],
//!   "historyLimit": 20
//! }
//! ```
//!
//! `stopwords`, when present, replaces the built-in English list entirely;
//! `extraStopwords` is added on top of whichever list is active.
//!
//! # Load order
//!
//! 1. An explicit path (the CLI's `--config`)
//! 2. The file named by `RANKWISE_CONFIG`
//! 3. Built-in defaults
//!
//! Command-line overrides are applied by the caller after loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RankError};
use crate::scoring::{Weights, DEFAULT_KEYWORD_WEIGHT, DEFAULT_TFIDF_WEIGHT, DEFAULT_TRACE_TERMS};
use crate::tokenize::{Stopwords, Tokenizer};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "RANKWISE_CONFIG";

/// Default number of history entries listed.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankerConfig {
    pub keyword_weight: f64,
    pub tfidf_weight: f64,
    pub trace_terms: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_stopwords: Vec<String>,
    pub history_limit: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
            tfidf_weight: DEFAULT_TFIDF_WEIGHT,
            trace_terms: DEFAULT_TRACE_TERMS,
            stopwords: None,
            extra_stopwords: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl RankerConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config per the load order above.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            let path = PathBuf::from(path);
            tracing::debug!(path = %path.display(), env = CONFIG_ENV, "loading config");
            return Self::from_file(&path);
        }
        Ok(Self::default())
    }

    /// Check weights are finite and the trace holds at least one term.
    pub fn validate(&self) -> Result<(), RankError> {
        self.weights().validate()?;
        if self.trace_terms == 0 {
            return Err(RankError::InvalidTraceDepth(self.trace_terms));
        }
        Ok(())
    }

    pub fn weights(&self) -> Weights {
        Weights {
            keyword: self.keyword_weight,
            tfidf: self.tfidf_weight,
        }
    }

    /// The active stopword set: replacement list or English, plus extras.
    pub fn stopwords(&self) -> Stopwords {
        let base: Stopwords = match &self.stopwords {
            Some(words) => words.iter().collect(),
            None => Stopwords::english(),
        };
        if self.extra_stopwords.is_empty() {
            base
        } else {
            base.extended(&self.extra_stopwords)
        }
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.stopwords())
    }
}
