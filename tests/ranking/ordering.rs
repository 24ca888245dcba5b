//! Result order: final score descending, provider order among ties.

use crate::common::{by_link, doc, identical_docs, links, pairs, sample_results, SEARCH_RESPONSE_JSON};
use rankwise::collab::parse_documents;
use rankwise::{rank, Weights};

#[test]
fn test_sorted_descending() {
    let ranked = rank("machine learning tutorial", sample_results(), Weights::default()).unwrap();
    for pair in ranked.windows(2) {
        assert!(pair[0].final_score >= pair[1].final_score);
    }
}

#[test]
fn test_exact_match_beats_plural() {
    let ranked = rank("machine learning tutorial", sample_results(), Weights::default()).unwrap();
    let exact = by_link(&ranked, "https://ml.example/tutorial");
    let plural = by_link(&ranked, "https://lists.example/ml-2024");

    assert_eq!(exact.keyword_score, 1.0);
    assert!((plural.keyword_score - 2.0 / 3.0).abs() < 1e-12);
    assert!(exact.final_score > plural.final_score);
    assert_eq!(ranked[0].document.link, "https://ml.example/tutorial");
}

#[test]
fn test_identical_documents_keep_input_order() {
    let ranked = rank(
        "rust compiler",
        identical_docs(6, "The Rust compiler", "rustc internals"),
        Weights::default(),
    )
    .unwrap();
    assert_eq!(
        links(&ranked),
        vec![
            "https://example.com/0",
            "https://example.com/1",
            "https://example.com/2",
            "https://example.com/3",
            "https://example.com/4",
            "https://example.com/5",
        ]
    );
}

#[test]
fn test_zero_score_tail_keeps_input_order() {
    let mut documents = pairs(&[
        ("Gardening", "tomatoes"),
        ("Knitting", "patterns"),
        ("Rust ownership", "borrow checker"),
        ("Pottery", "glazes"),
    ]);
    documents.push(doc("", "", "https://example.com/empty"));

    let ranked = rank("rust borrow", documents, Weights::default()).unwrap();
    assert_eq!(ranked[0].document.link, "https://example.com/2");
    assert_eq!(
        links(&ranked)[1..],
        [
            "https://example.com/0",
            "https://example.com/1",
            "https://example.com/3",
            "https://example.com/empty"
        ]
    );
}

#[test]
fn test_keyword_only_weights_order_by_coverage() {
    let documents = pairs(&[
        ("alpha", ""),
        ("alpha bravo charlie", ""),
        ("alpha bravo", ""),
    ]);
    let weights = Weights::new(1.0, 0.0).unwrap();
    let ranked = rank("alpha bravo charlie", documents, weights).unwrap();
    assert_eq!(
        links(&ranked),
        vec!["https://example.com/1", "https://example.com/2", "https://example.com/0"]
    );
    for result in &ranked {
        assert_eq!(result.final_score, result.keyword_score);
    }
}

#[test]
fn test_search_response_ranking() {
    let docs = parse_documents(SEARCH_RESPONSE_JSON).unwrap();
    let ranked = rank("rust async runtime", docs, Weights::default()).unwrap();
    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].document.link, "https://tokio.rs");
    assert_eq!(ranked[3].document.link, "https://example.com/untitled");
    assert_eq!(ranked[3].final_score, 0.0);
}
