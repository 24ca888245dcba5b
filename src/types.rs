// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: documents in, ranked documents out.
//!
//! A [`Document`] is whatever the search provider handed us. The engine never
//! touches its fields; it only reads `title` and `snippet` and appends scores.
//! Fields the provider sent that we don't model (position, displayed link,
//! favicon, ...) ride along in `extra` so the output is the input plus scores.
//!
//! A [`RankedDocument`] serializes flat: the document's own fields followed by
//! `keywordScore`, `tfidfScore`, `finalScore` and `calculationTrace`. That is
//! the shape the audit view reads verbatim.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keys a [`RankedDocument`] writes next to the document's own fields.
///
/// A provider field with one of these names would serialize twice, so the
/// engine drops it from [`Document::extra`] before attaching its own value.
pub const DERIVED_KEYS: &[&str] = &["keywordScore", "tfidfScore", "finalScore", "calculationTrace"];

/// Providers send `null` for a missing snippet as often as they omit it.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One ranking candidate as supplied by the search provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub snippet: String,
    /// Opaque; passed through unmodified.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    /// Provider fields we don't interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: link.into(),
            extra: Map::new(),
        }
    }

    /// Drop provider fields that collide with [`DERIVED_KEYS`].
    pub fn strip_derived_keys(&mut self) {
        for key in DERIVED_KEYS {
            self.extra.remove(*key);
        }
    }

    /// The text unit that gets tokenized: title and snippet joined by a space.
    pub fn ranking_text(&self) -> String {
        format!("{} {}", self.title, self.snippet)
    }
}

/// A document after ranking: the original plus its scores and audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDocument {
    #[serde(flatten)]
    pub document: Document,
    /// Fraction of query terms found literally in the document.
    pub keyword_score: f64,
    /// Cosine similarity between the query and document TF-IDF vectors.
    pub tfidf_score: f64,
    /// `keyword_weight * keyword_score + tfidf_weight * tfidf_score`.
    pub final_score: f64,
    pub calculation_trace: CalculationTrace,
}

/// Per-document explainability record.
///
/// Every number here can be recomputed from the other fields of the trace;
/// the `recomputed_*` helpers do exactly that and are what the contracts and
/// tests check against.
///
/// `query_norm` and `document_norm` are the real norms even when the other one
/// is 0 (a document sharing no weighted term with the query), so their
/// product can be 0 while `dot_product` is 0 too. Anything presenting the
/// trace must go through [`CalculationTrace::recomputed_similarity`] rather
/// than dividing `dot_product` by the product itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationTrace {
    /// The query's full token list, repeats included.
    pub query_terms: Vec<String>,
    /// Query tokens found in the document, in query order, repeats included.
    pub matched_terms: Vec<String>,
    /// Highest term-frequency document terms.
    pub top_tf_terms: Vec<TfEntry>,
    /// Highest inverse-document-frequency query terms.
    pub top_idf_terms: Vec<IdfEntry>,
    pub dot_product: f64,
    pub query_norm: f64,
    /// Norm of the document vector.
    #[serde(rename = "postNorm")]
    pub document_norm: f64,
}

impl CalculationTrace {
    /// Cosine similarity recomputed from the three stored intermediates.
    pub fn recomputed_similarity(&self) -> f64 {
        let denominator = self.query_norm * self.document_norm;
        if denominator == 0.0 {
            0.0
        } else {
            self.dot_product / denominator
        }
    }

    /// Keyword score recomputed from the stored term lists.
    pub fn recomputed_keyword_score(&self) -> f64 {
        if self.query_terms.is_empty() {
            0.0
        } else {
            self.matched_terms.len() as f64 / self.query_terms.len() as f64
        }
    }
}

/// A term-frequency line in the trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TfEntry {
    pub term: String,
    pub tf: f64,
    /// Raw occurrences of `term` in the document.
    pub count: usize,
    /// Token length of the document.
    pub total_terms: usize,
}

impl TfEntry {
    pub fn recomputed_tf(&self) -> f64 {
        if self.total_terms == 0 {
            0.0
        } else {
            self.count as f64 / self.total_terms as f64
        }
    }
}

/// An inverse-document-frequency line in the trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdfEntry {
    pub term: String,
    pub idf: f64,
    /// Corpus members (query included) containing `term`.
    pub docs_with_term: usize,
    /// Corpus size: the query plus every document.
    pub total_docs: usize,
}

impl IdfEntry {
    pub fn recomputed_idf(&self) -> f64 {
        crate::tfidf::idf_formula(self.total_docs, self.docs_with_term)
    }
}
