// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking engine: documents in, ordered and explained documents out.
//!
//! # Pipeline
//!
//! ```text
//! query ───────────┐
//!                  ├─► tokenize ─► Corpus ─► IdfTable ─► tf·idf vectors
//! title + snippet ─┘                                          │
//!                                                             ▼
//!          per document: keyword score, cosine score, fused score, trace
//!                                                             │
//!                                                             ▼
//!                                     stable sort by final score descending
//! ```
//!
//! Every call rebuilds the corpus statistics from scratch. Nothing is cached
//! between calls, so a [`Ranker`] is just configuration and can be shared
//! freely across threads.
//!
//! With the `parallel` feature, tokenization and per-document scoring fan out
//! over rayon. Both steps collect in input order, so the stable sort sees the
//! same sequence as the sequential path and output is identical.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::RankerConfig;
use crate::contracts;
use crate::error::RankError;
use crate::keyword::keyword_match;
use crate::scoring::{fuse, ranking::sort_ranked, Weights, DEFAULT_TRACE_TERMS};
use crate::similarity::cosine_breakdown;
use crate::tfidf::{term_counts, Corpus, IdfTable, TfIdfModel};
use crate::tokenize::Tokenizer;
use crate::types::{CalculationTrace, Document, IdfEntry, RankedDocument, TfEntry};

/// A configured ranking engine.
#[derive(Debug, Clone)]
pub struct Ranker {
    tokenizer: Tokenizer,
    weights: Weights,
    trace_terms: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            weights: Weights::default(),
            trace_terms: DEFAULT_TRACE_TERMS,
        }
    }
}

impl Ranker {
    pub fn new(tokenizer: Tokenizer, weights: Weights, trace_terms: usize) -> Result<Self, RankError> {
        weights.validate()?;
        if trace_terms == 0 {
            return Err(RankError::InvalidTraceDepth(trace_terms));
        }
        Ok(Self {
            tokenizer,
            weights,
            trace_terms,
        })
    }

    /// Build from a validated configuration.
    pub fn from_config(config: &RankerConfig) -> Result<Self, RankError> {
        config.validate()?;
        Self::new(config.tokenizer(), config.weights(), config.trace_terms)
    }

    /// Same engine with different fusion weights.
    pub fn with_weights(mut self, weights: Weights) -> Result<Self, RankError> {
        weights.validate()?;
        self.weights = weights;
        Ok(self)
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    pub fn trace_terms(&self) -> usize {
        self.trace_terms
    }

    /// Score and order `documents` against `query`.
    ///
    /// Never fails for well-formed input: an empty query or empty documents
    /// score 0, and an empty list returns an empty list. The only error is a
    /// weight that went non-finite after construction (it can't, but the
    /// check costs nothing next to tokenization).
    pub fn rank(&self, query: &str, documents: Vec<Document>) -> Result<Vec<RankedDocument>, RankError> {
        self.weights.validate()?;

        if documents.is_empty() {
            debug!(query, "no documents to rank");
            return Ok(Vec::new());
        }

        let query_terms = self.tokenizer.tokenize(query);
        let document_terms = self.tokenize_documents(&documents);

        let corpus = Corpus::new(query_terms, document_terms);
        let model = TfIdfModel::fit(&corpus);

        debug!(
            query,
            documents = corpus.document_count(),
            query_terms = corpus.query().len(),
            vocabulary = model.idf().vocabulary_size(),
            "ranking"
        );

        let mut results: Vec<RankedDocument> = {
            #[cfg(feature = "parallel")]
            {
                documents
                    .into_par_iter()
                    .enumerate()
                    .map(|(i, document)| self.score_document(i, document, &corpus, &model))
                    .collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                documents
                    .into_iter()
                    .enumerate()
                    .map(|(i, document)| self.score_document(i, document, &corpus, &model))
                    .collect()
            }
        };

        sort_ranked(&mut results);

        contracts::check_ranked_sorted(&results);
        contracts::check_fusion(&results, &self.weights);
        contracts::check_traces_reproducible(&results);

        Ok(results)
    }

    fn tokenize_documents(&self, documents: &[Document]) -> Vec<Vec<String>> {
        #[cfg(feature = "parallel")]
        {
            documents
                .par_iter()
                .map(|doc| self.tokenizer.tokenize(&doc.ranking_text()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            documents
                .iter()
                .map(|doc| self.tokenizer.tokenize(&doc.ranking_text()))
                .collect()
        }
    }

    fn score_document(
        &self,
        index: usize,
        mut document: Document,
        corpus: &Corpus,
        model: &TfIdfModel,
    ) -> RankedDocument {
        let query_terms = corpus.query();
        let doc_terms = corpus.document(index);

        let keyword = keyword_match(query_terms, doc_terms);
        let cosine = cosine_breakdown(model.query_vector(), model.document_vector(index));
        let final_score = fuse(keyword.score, cosine.similarity, &self.weights);

        trace!(
            link = %document.link,
            keyword = keyword.score,
            tfidf = cosine.similarity,
            final_score,
            "scored document"
        );

        let calculation_trace = CalculationTrace {
            query_terms: keyword.query_terms,
            matched_terms: keyword.matched_terms,
            top_tf_terms: top_tf_terms(doc_terms, self.trace_terms),
            top_idf_terms: top_idf_terms(query_terms, model.idf(), self.trace_terms),
            dot_product: cosine.dot_product,
            query_norm: cosine.norm_a,
            document_norm: cosine.norm_b,
        };

        // Engine values win over same-named provider fields
        document.strip_derived_keys();

        RankedDocument {
            document,
            keyword_score: keyword.score,
            tfidf_score: cosine.similarity,
            final_score,
            calculation_trace,
        }
    }
}

/// Rank with the default tokenizer and trace depth.
pub fn rank(query: &str, documents: Vec<Document>, weights: Weights) -> Result<Vec<RankedDocument>, RankError> {
    Ranker::default().with_weights(weights)?.rank(query, documents)
}

// =============================================================================
// TRACE
// =============================================================================

/// Highest-frequency document terms. Ties keep first-occurrence order.
pub fn top_tf_terms(doc_terms: &[String], limit: usize) -> Vec<TfEntry> {
    let total_terms = doc_terms.len();
    let mut entries: Vec<TfEntry> = term_counts(doc_terms)
        .into_iter()
        .map(|(term, count)| TfEntry {
            term,
            tf: count as f64 / total_terms as f64,
            count,
            total_terms,
        })
        .collect();

    // Stable: equal counts stay in first-occurrence order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

/// Highest-IDF query terms, walked in query order with repeats kept.
pub fn top_idf_terms(query_terms: &[String], idf: &IdfTable, limit: usize) -> Vec<IdfEntry> {
    let mut entries: Vec<IdfEntry> = query_terms
        .iter()
        .map(|term| IdfEntry {
            term: term.clone(),
            idf: idf.idf(term),
            docs_with_term: idf.document_frequency(term),
            total_docs: idf.corpus_size(),
        })
        .collect();

    entries.sort_by(|a, b| b.idf.partial_cmp(&a.idf).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(limit);
    entries
}
