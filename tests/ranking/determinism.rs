//! Same inputs, same bytes.
//!
//! The audit view prints scores verbatim, so run-to-run jitter in the last
//! float digit would show up as a diff. Vectors are ordered maps precisely
//! so these tests can compare serialized output byte for byte.

use crate::common::{sample_results, SEARCH_RESPONSE_JSON};
use rankwise::collab::parse_documents;
use rankwise::{rank, Ranker, Weights};

#[test]
fn test_repeated_calls_serialize_identically() {
    let first = rank("machine learning tutorial", sample_results(), Weights::default()).unwrap();
    let first = serde_json::to_string(&first).unwrap();

    for _ in 0..10 {
        let again = rank("machine learning tutorial", sample_results(), Weights::default()).unwrap();
        assert_eq!(serde_json::to_string(&again).unwrap(), first);
    }
}

#[test]
fn test_fresh_rankers_agree() {
    let docs = parse_documents(SEARCH_RESPONSE_JSON).unwrap();
    let a = Ranker::default().rank("rust async runtime", docs.clone()).unwrap();
    let b = Ranker::default().rank("rust async runtime", docs).unwrap();
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn test_concurrent_callers_agree() {
    let ranker = Ranker::default();
    let expected = serde_json::to_string(&ranker.rank("deep learning book", sample_results()).unwrap()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    serde_json::to_string(&ranker.rank("deep learning book", sample_results()).unwrap())
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_provider_fields_pass_through() {
    let docs = parse_documents(SEARCH_RESPONSE_JSON).unwrap();
    let ranked = rank("rust async runtime", docs, Weights::default()).unwrap();
    let value = serde_json::to_value(&ranked).unwrap();

    let tokio = value
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["link"] == "https://tokio.rs")
        .unwrap();
    assert_eq!(tokio["position"], 1);
    assert_eq!(tokio["displayed_link"], "tokio.rs");
    assert!(tokio["calculationTrace"]["queryTerms"].is_array());
}

#[test]
fn test_engine_scores_replace_provider_fields() {
    let docs = parse_documents(
        r#"[{"title": "Rust", "link": "L", "keywordScore": 99, "finalScore": "high", "rank": 3}]"#,
    )
    .unwrap();
    let ranked = rank("rust", docs, Weights::default()).unwrap();
    let text = serde_json::to_string(&ranked[0]).unwrap();

    assert_eq!(text.matches("\"keywordScore\"").count(), 1);
    assert_eq!(text.matches("\"finalScore\"").count(), 1);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["keywordScore"], 1.0);
    assert_eq!(value["rank"], 3);
}
