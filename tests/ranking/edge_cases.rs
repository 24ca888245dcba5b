//! Degenerate inputs: empty queries, empty documents, stopword-only text.

use crate::common::{doc, docs, identical_docs, pairs};
use rankwise::{rank, Document, Ranker, RankerConfig, Weights};

#[test]
fn test_empty_list_ranks_to_empty() {
    assert!(rank("anything", Vec::new(), Weights::default()).unwrap().is_empty());
}

#[test]
fn test_stopword_only_query_scores_zero() {
    let ranked = rank("the and of", docs(&["The art of war", "And then there were none"]), Weights::default()).unwrap();
    for result in &ranked {
        assert_eq!(result.final_score, 0.0);
        assert!(result.calculation_trace.query_terms.is_empty());
        assert!(result.calculation_trace.top_idf_terms.is_empty());
    }
}

#[test]
fn test_punctuation_only_document() {
    let ranked = rank("rust", vec![doc("!!!", "--- ??? ...", "https://p.example")], Weights::default()).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].final_score, 0.0);
    assert!(ranked[0].calculation_trace.top_tf_terms.is_empty());
    assert_eq!(ranked[0].calculation_trace.document_norm, 0.0);
}

#[test]
fn test_zero_norm_trace_recomputes_to_zero() {
    // The empty document has norm 0 while the query keeps its real norm
    let ranked = rank("rust", vec![doc("Rust", "", "a"), doc("", "", "b"), doc("cargo", "", "c")], Weights::default()).unwrap();
    let empty = ranked.iter().find(|r| r.document.link == "b").unwrap();
    let trace = &empty.calculation_trace;

    assert!(trace.query_norm > 0.0);
    assert_eq!(trace.document_norm, 0.0);
    assert_eq!(trace.dot_product, 0.0);
    assert_eq!(trace.recomputed_similarity(), 0.0);
    assert_eq!(empty.tfidf_score, 0.0);
}

#[test]
fn test_default_documents_rank() {
    let ranked = rank("rust", vec![Document::default(), Document::default()], Weights::default()).unwrap();
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|r| r.final_score == 0.0));
}

#[test]
fn test_literal_keyword_matching() {
    let plural = rank("machine learning tutorial", docs(&["machine learning tutorials"]), Weights::default()).unwrap();
    assert!((plural[0].keyword_score - 2.0 / 3.0).abs() < 1e-12);

    let exact = rank("machine learning tutorial", docs(&["machine learning tutorial"]), Weights::default()).unwrap();
    assert_eq!(exact[0].keyword_score, 1.0);
}

#[test]
fn test_case_and_punctuation_are_ignored() {
    let ranked = rank("RUST-LANG!", docs(&["rust lang"]), Weights::default()).unwrap();
    assert_eq!(ranked[0].calculation_trace.query_terms, vec!["rust", "lang"]);
    assert_eq!(ranked[0].keyword_score, 1.0);
}

#[test]
fn test_non_ascii_letters_split_words() {
    // Only ASCII letters, digits and underscore form words
    let ranked = rank("café", docs(&["café"]), Weights::default()).unwrap();
    assert_eq!(ranked[0].calculation_trace.query_terms, vec!["caf"]);
    assert_eq!(ranked[0].keyword_score, 1.0);
}

#[test]
fn test_single_document_corpus() {
    let ranked = rank("rust", docs(&["Rust"]), Weights::default()).unwrap();
    // Two corpus members, both containing the term: ln(2 / 3) < 0
    let idf = &ranked[0].calculation_trace.top_idf_terms[0];
    assert!(idf.idf < 0.0);
    assert!(ranked[0].tfidf_score >= 0.0);
    assert!(ranked[0].final_score.is_finite());
}

#[test]
fn test_default_weights_bound_scores() {
    let ranked = rank(
        "rust async runtime",
        pairs(&[
            ("Rust async runtime", "rust async runtime"),
            ("Rust", ""),
            ("", ""),
            ("Unrelated text entirely", "nothing shared"),
        ]),
        Weights::default(),
    )
    .unwrap();
    for result in &ranked {
        assert!((0.0..=1.0 + 1e-12).contains(&result.final_score));
        assert!((0.0..=1.0 + 1e-12).contains(&result.tfidf_score));
    }
}

#[test]
fn test_unnormalized_weights_are_allowed() {
    let ranked = rank("alpha", docs(&["alpha", "bravo"]), Weights::new(2.0, 0.0).unwrap()).unwrap();
    assert_eq!(ranked[0].final_score, 2.0);
}

#[test]
fn test_many_identical_documents() {
    let ranked = rank("rust", identical_docs(200, "Rust", "rust"), Weights::default()).unwrap();
    assert_eq!(ranked.len(), 200);
    let first = ranked[0].final_score;
    assert!(ranked.iter().all(|r| r.final_score == first));
    assert_eq!(ranked[199].document.link, "https://example.com/199");
}

#[test]
fn test_custom_stopwords_from_config() {
    let config = RankerConfig::from_json(r#"{"extraStopwords": ["rust"]}"#).unwrap();
    let ranker = Ranker::from_config(&config).unwrap();
    let ranked = ranker.rank("rust compiler", docs(&["Rust compiler"])).unwrap();
    assert_eq!(ranked[0].calculation_trace.query_terms, vec!["compiler"]);
}

#[test]
fn test_non_finite_weights_rejected() {
    assert!(Weights::new(f64::INFINITY, 0.6).is_err());
    assert!(Weights::new(0.4, f64::NAN).is_err());
}
