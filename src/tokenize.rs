// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization: raw text to the terms every other stage counts.
//!
//! The pipeline is deliberately dumb: lowercase, blank out anything that is
//! not an ASCII word character or whitespace, split, then drop short words
//! and stopwords. No stemming, no diacritic folding. "tutorials" and
//! "tutorial" are different terms.
//!
//! # Token rules
//!
//! | Step | Rule |
//! |------|------|
//! | 1 | Lowercase the whole input |
//! | 2 | Replace every char outside `[a-z0-9_]` and whitespace with a space |
//! | 3 | Split on whitespace runs |
//! | 4 | Drop terms of length ≤ 2 |
//! | 5 | Drop stopwords |
//!
//! The stopword set is a value owned by the [`Tokenizer`], fixed at
//! construction. Two tokenizers built from the same set always agree.

use std::collections::HashSet;
use std::sync::Arc;

/// Terms this short or shorter never survive tokenization.
pub const MAX_DROPPED_TERM_LEN: usize = 2;

/// Common English function words.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "but", "or", "not",
    "this", "they", "have", "had", "what", "said", "each", "which", "do", "how", "their", "if",
    "up", "out", "many", "then", "them", "can", "would", "could", "should", "may", "might",
    "must", "shall",
];

/// Immutable stopword set. Cheap to clone; clones share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords(Arc<HashSet<String>>);

impl Stopwords {
    /// The built-in English list.
    pub fn english() -> Self {
        ENGLISH_STOPWORDS.iter().copied().collect()
    }

    /// No stopwords at all; only the length filter applies.
    pub fn none() -> Self {
        Self(Arc::new(HashSet::new()))
    }

    /// A new set containing this one plus `extra`. Entries are lowercased so
    /// they can match lowercased tokens.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: HashSet<String> = (*self.0).clone();
        words.extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        Self(Arc::new(words))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(Arc::new(
            iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        ))
    }
}

/// Turns text into filtered, order-preserving term sequences.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: Stopwords,
}

impl Tokenizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Tokenize `text`. Empty or all-punctuation input gives an empty vec.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| word.len() > MAX_DROPPED_TERM_LEN && !self.stopwords.contains(word))
            .map(str::to_string)
            .collect()
    }
}

/// Word characters survive cleaning: ASCII letters, digits and underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize with the default English tokenizer.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}
