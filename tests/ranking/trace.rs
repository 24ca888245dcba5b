//! Every number in a trace can be recomputed from the trace itself.

use crate::common::{assert_close, by_link, docs, sample_results, SEARCH_RESPONSE_JSON};
use rankwise::collab::parse_documents;
use rankwise::{idf_formula, rank, Ranker, Tokenizer, Weights};

const TOL: f64 = 1e-9;

#[test]
fn test_traces_recompute_scores() {
    let weights = Weights::default();
    let ranked = rank("machine learning tutorial", sample_results(), weights).unwrap();

    for result in &ranked {
        let trace = &result.calculation_trace;
        assert_close(trace.recomputed_keyword_score(), result.keyword_score, TOL);
        assert_close(trace.recomputed_similarity(), result.tfidf_score, TOL);
        assert_close(
            weights.keyword * result.keyword_score + weights.tfidf * result.tfidf_score,
            result.final_score,
            TOL,
        );
        for entry in &trace.top_tf_terms {
            assert_close(entry.recomputed_tf(), entry.tf, TOL);
        }
        for entry in &trace.top_idf_terms {
            assert_close(entry.recomputed_idf(), entry.idf, TOL);
        }
    }
}

#[test]
fn test_query_counts_as_corpus_member() {
    let ranked = rank("rust async runtime", parse_documents(SEARCH_RESPONSE_JSON).unwrap(), Weights::default()).unwrap();
    for result in &ranked {
        for entry in &result.calculation_trace.top_idf_terms {
            assert_eq!(entry.total_docs, 5);
            // The query itself always contributes one
            assert!(entry.docs_with_term >= 1);
        }
    }
}

#[test]
fn test_runtime_has_highest_idf() {
    // "runtime" appears only in the query and the tokio page
    let ranked = rank("rust async runtime", parse_documents(SEARCH_RESPONSE_JSON).unwrap(), Weights::default()).unwrap();
    let tokio = by_link(&ranked, "https://tokio.rs");
    let idf = &tokio.calculation_trace.top_idf_terms;

    assert_eq!(idf[0].term, "runtime");
    assert_eq!(idf[0].docs_with_term, 2);
    assert_close(idf[0].idf, (5.0f64 / 3.0).ln(), TOL);
}

#[test]
fn test_idf_falls_as_document_frequency_rises() {
    let mut previous = f64::INFINITY;
    for df in 1..10 {
        let idf = idf_formula(10, df);
        assert!(idf < previous);
        previous = idf;
    }
}

#[test]
fn test_matched_terms_follow_query_order() {
    let ranked = rank(
        "charlie alpha bravo alpha",
        docs(&["alpha bravo charlie"]),
        Weights::default(),
    )
    .unwrap();
    let trace = &ranked[0].calculation_trace;
    assert_eq!(trace.query_terms, vec!["charlie", "alpha", "bravo", "alpha"]);
    assert_eq!(trace.matched_terms, vec!["charlie", "alpha", "bravo", "alpha"]);
    assert_eq!(ranked[0].keyword_score, 1.0);
}

#[test]
fn test_trace_reports_actual_norms() {
    let ranked = rank("rust", docs(&["Rust Rust Rust", "cargo", "crates"]), Weights::default()).unwrap();
    let cargo = by_link(&ranked, "https://example.com/1");
    let trace = &cargo.calculation_trace;

    assert_eq!(trace.dot_product, 0.0);
    assert!(trace.query_norm > 0.0);
    assert!(trace.document_norm > 0.0);
    assert_eq!(cargo.tfidf_score, 0.0);
}

#[test]
fn test_trace_depth_bounds_term_lists() {
    let ranker = Ranker::new(Tokenizer::default(), Weights::default(), 1).unwrap();
    let ranked = ranker.rank("machine learning tutorial", sample_results()).unwrap();
    for result in &ranked {
        assert!(result.calculation_trace.top_tf_terms.len() <= 1);
        assert!(result.calculation_trace.top_idf_terms.len() <= 1);
    }
}

#[test]
fn test_trace_serializes_audit_fields() {
    let ranked = rank("machine learning", sample_results(), Weights::default()).unwrap();
    let value = serde_json::to_value(&ranked[0]).unwrap();
    let trace = &value["calculationTrace"];

    for key in [
        "queryTerms",
        "matchedTerms",
        "topTfTerms",
        "topIdfTerms",
        "dotProduct",
        "queryNorm",
        "postNorm",
    ] {
        assert!(trace.get(key).is_some(), "missing {}", key);
    }
    assert!(trace["topTfTerms"][0].get("totalTerms").is_some());
    assert!(trace["topIdfTerms"][0].get("docsWithTerm").is_some());
}

#[test]
fn test_rare_term_outweighs_common_term() {
    let ranked = rank(
        "rust tokio",
        docs(&["rust cargo", "rust crates", "rust tokio"]),
        Weights::default(),
    )
    .unwrap();
    let idf = &ranked[0].calculation_trace.top_idf_terms;
    assert_eq!(idf[0].term, "tokio");
    assert_eq!(idf[1].term, "rust");
    assert!(idf[0].idf > idf[1].idf);
    assert_eq!(idf[1].docs_with_term, 4);
}
