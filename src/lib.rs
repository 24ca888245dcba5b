// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explainable relevance ranking for web search results.
//!
//! Given a query and the documents a search provider returned for it, this
//! crate orders the documents by a blend of two signals and records, for every
//! document, the numbers that produced its score:
//!
//! - **keyword score**: the fraction of query terms found literally
//! - **TF-IDF similarity**: cosine similarity of term-weight vectors built
//!   over the query plus the result page
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ tokenize.rs │────▶│  keyword.rs  │────▶│               │
//! │ (Tokenizer, │     │ (|matched|/  │     │   engine.rs   │
//! │  Stopwords) │     │   |query|)   │     │   (Ranker)    │
//! └─────────────┘     └──────────────┘     │               │
//!        │            ┌──────────────┐     │  fuse + sort  │
//!        └───────────▶│  tfidf.rs    │────▶│  + trace      │
//!                     │ similarity.rs│     │               │
//!                     └──────────────┘     └───────────────┘
//!                                                  │
//!        ┌─────────────────────────────────────────┤
//!        ▼                                         ▼
//! ┌──────────────┐                        ┌─────────────────┐
//! │ contracts.rs │                        │ collab/         │
//! │ (debug-build │                        │ provider, scrape│
//! │  invariants) │                        │ rewrite, history│
//! └──────────────┘                        └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use rankwise::{rank, Document, Weights};
//!
//! let docs = vec![
//!     Document::new("Cooking pasta", "Simple recipes", "https://food.example"),
//!     Document::new("Rust tutorial", "Learn the Rust language", "https://rust.example"),
//! ];
//! let ranked = rank("rust tutorial", docs, Weights::default()).unwrap();
//! assert_eq!(ranked[0].document.link, "https://rust.example");
//! ```
//!
//! Every call is self-contained: no caches, no I/O, no global state.

pub mod collab;
pub mod config;
pub mod contracts;
mod engine;
mod error;
pub mod keyword;
pub mod scoring;
pub mod similarity;
pub mod testing;
pub mod tfidf;
pub mod tokenize;
mod types;

// Re-exports for public API
pub use config::RankerConfig;
pub use engine::{rank, top_idf_terms, top_tf_terms, Ranker};
pub use error::{CollaboratorError, ConfigError, HistoryError, PipelineError, RankError};
pub use keyword::{keyword_match, keyword_score, KeywordMatch};
pub use scoring::{fuse, Weights, DEFAULT_KEYWORD_WEIGHT, DEFAULT_TFIDF_WEIGHT, DEFAULT_TRACE_TERMS};
pub use similarity::{cosine_breakdown, cosine_similarity, CosineBreakdown};
pub use tfidf::{idf_formula, Corpus, IdfTable, TermVector, TfIdfModel};
pub use tokenize::{tokenize, Stopwords, Tokenizer};
pub use types::{CalculationTrace, Document, IdfEntry, RankedDocument, TfEntry, DERIVED_KEYS};
