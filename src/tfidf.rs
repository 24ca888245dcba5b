// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF statistics over a single ranking call's corpus.
//!
//! The corpus is the query plus every candidate document, query first:
//!
//! ```text
//! index 0   : tokenize(query)
//! index 1..n: tokenize(title + " " + snippet)
//! ```
//!
//! Including the query as a member is what makes `N` in the IDF formula
//! `documents + 1`, and it means every query term has `df >= 1`.
//!
//! # Formulas
//!
//! ```text
//! tf(t, i)  = count(t, i) / |tokens(i)|
//! idf(t)    = ln(N / (df(t) + 1))
//! w(t, i)   = tf(t, i) * idf(t)
//! ```
//!
//! The `+ 1` keeps the division finite; the price is that a term present in
//! every member gets `ln(N / (N + 1)) < 0`. That is left as is. Because the
//! same idf multiplies both sides of a dot product, shared-term products are
//! `tf_a * tf_b * idf² >= 0` and cosine similarity stays non-negative anyway.
//!
//! Vectors are `BTreeMap`s. Iteration order feeds floating-point sums, and a
//! hash map would make those sums (and the printed scores) vary run to run.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sparse term → weight vector. Absent terms are implicitly 0.
pub type TermVector = BTreeMap<String, f64>;

/// `ln(total_docs / (docs_with_term + 1))`, 0 for an empty corpus.
pub fn idf_formula(total_docs: usize, docs_with_term: usize) -> f64 {
    if total_docs == 0 {
        return 0.0;
    }
    (total_docs as f64 / (docs_with_term as f64 + 1.0)).ln()
}

/// Term counts in first-occurrence order.
///
/// Order matters for the trace: terms with equal frequency are listed in the
/// order they first appeared in the document.
pub fn term_counts(tokens: &[String]) -> Vec<(String, usize)> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        match position.get(token.as_str()) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                position.insert(token.as_str(), counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }

    counts
}

/// Normalized term frequencies. Empty input gives an empty map.
pub fn term_frequencies(tokens: &[String]) -> BTreeMap<String, f64> {
    let total = tokens.len();
    term_counts(tokens)
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total as f64))
        .collect()
}

/// The token sequences of one ranking call. Index 0 is the query.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    members: Vec<Vec<String>>,
}

impl Corpus {
    pub fn new(query: Vec<String>, documents: Vec<Vec<String>>) -> Self {
        let mut members = Vec::with_capacity(documents.len() + 1);
        members.push(query);
        members.extend(documents);
        Self { members }
    }

    /// Number of members: documents plus the query.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn query(&self) -> &[String] {
        self.members.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tokens of document `i` (0-based, not counting the query).
    pub fn document(&self, i: usize) -> &[String] {
        self.members.get(i + 1).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn document_count(&self) -> usize {
        self.members.len().saturating_sub(1)
    }

    pub fn members(&self) -> &[Vec<String>] {
        &self.members
    }
}

/// Document frequencies and IDF weights for every term in a corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    document_frequency: BTreeMap<String, usize>,
    idf: BTreeMap<String, f64>,
    corpus_size: usize,
}

impl IdfTable {
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for member in corpus.members() {
            let distinct: BTreeSet<&str> = member.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        // INVARIANT: every query term has df >= 1 because the query is a member
        let corpus_size = corpus.len();
        let idf = document_frequency
            .iter()
            .map(|(term, &df)| (term.clone(), idf_formula(corpus_size, df)))
            .collect();

        Self {
            document_frequency,
            idf,
            corpus_size,
        }
    }

    /// IDF of `term`; 0 for terms outside the corpus.
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    /// Number of corpus members containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

/// TF-IDF vector for one token sequence, restricted to terms it contains.
pub fn tfidf_vector(tokens: &[String], idf: &IdfTable) -> TermVector {
    term_frequencies(tokens)
        .into_iter()
        .map(|(term, tf)| {
            let weight = tf * idf.idf(&term);
            (term, weight)
        })
        .collect()
}

/// Every member's vector plus the shared IDF table.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    idf: IdfTable,
    vectors: Vec<TermVector>,
}

impl TfIdfModel {
    pub fn fit(corpus: &Corpus) -> Self {
        let idf = IdfTable::from_corpus(corpus);
        let vectors = corpus
            .members()
            .iter()
            .map(|member| tfidf_vector(member, &idf))
            .collect();
        Self { idf, vectors }
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    pub fn query_vector(&self) -> &TermVector {
        &self.vectors[0]
    }

    /// Vector of document `i` (0-based, not counting the query).
    pub fn document_vector(&self, i: usize) -> &TermVector {
        &self.vectors[i + 1]
    }
}
